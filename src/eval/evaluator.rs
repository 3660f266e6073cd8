//! Content evaluator: validates a request and runs matching then selection.

use super::condition::{compute_satisfied_ids, MatchPolicy};
use super::selection::filter_and_project;
use crate::content::RawContent;
use crate::error::EvaluationError;
use crate::types::{AttributeSet, ConditionMap, ResultRecord};
use std::borrow::Cow;
use tracing::{debug, instrument};

/// Anything that evaluates to a list of result records.
pub trait Evaluator {
    fn evaluate(&self) -> Result<Vec<ResultRecord>, EvaluationError>;
}

/// Inputs of one evaluation, all borrowed and read-only.
///
/// `content` and `attributes` are required. [`EvaluationRequest::new`] fills
/// the rest with their defaults: an empty condition map and
/// [`MatchPolicy::Partial`]. Override them with struct update syntax.
#[derive(Debug, Clone)]
pub struct EvaluationRequest<'a> {
    pub content: &'a RawContent,
    pub attributes: &'a AttributeSet,
    pub conditions: Cow<'a, ConditionMap>,
    pub policy: MatchPolicy,
}

impl<'a> EvaluationRequest<'a> {
    pub fn new(content: &'a RawContent, attributes: &'a AttributeSet) -> Self {
        Self {
            content,
            attributes,
            conditions: Cow::Owned(ConditionMap::new()),
            policy: MatchPolicy::default(),
        }
    }
}

/// Evaluates one [`EvaluationRequest`].
#[derive(Debug, Clone)]
pub struct ContentEvaluator<'a> {
    request: EvaluationRequest<'a>,
}

impl<'a> ContentEvaluator<'a> {
    pub fn new(request: EvaluationRequest<'a>) -> Self {
        Self { request }
    }

    pub fn request(&self) -> &EvaluationRequest<'a> {
        &self.request
    }

    fn check_preconditions(&self) -> Result<(), EvaluationError> {
        if self.request.content.is_empty() {
            return Err(EvaluationError::precondition(
                "content",
                "content must not be empty",
            ));
        }
        if self.request.attributes.is_empty() {
            return Err(EvaluationError::precondition(
                "attributes",
                "at least one attribute must be requested",
            ));
        }
        Ok(())
    }
}

impl Evaluator for ContentEvaluator<'_> {
    #[instrument(level = "debug", skip(self), fields(policy = ?self.request.policy))]
    fn evaluate(&self) -> Result<Vec<ResultRecord>, EvaluationError> {
        self.check_preconditions()?;

        let selection_nodes = self.request.content.selection_nodes()?;
        if selection_nodes.is_empty() {
            return Err(EvaluationError::MalformedContent(
                "no selection nodes defined; at least one entry under `selectionNodes` is required"
                    .to_string(),
            ));
        }

        let condition_nodes = self.request.content.condition_nodes()?;
        let satisfied_ids = if condition_nodes.is_empty() {
            Vec::new()
        } else {
            compute_satisfied_ids(&condition_nodes, &self.request.conditions, self.request.policy)
        };

        let records = filter_and_project(&selection_nodes, self.request.attributes, &satisfied_ids)?;
        debug!(
            selection_nodes = selection_nodes.len(),
            condition_nodes = condition_nodes.len(),
            satisfied = satisfied_ids.len(),
            records = records.len(),
            "Content evaluated"
        );
        Ok(records)
    }
}

/// Evaluate `content` against `conditions` with the default match policy.
pub fn evaluate(
    content: &RawContent,
    attributes: &AttributeSet,
    conditions: &ConditionMap,
) -> Result<Vec<ResultRecord>, EvaluationError> {
    ContentEvaluator::new(EvaluationRequest {
        conditions: Cow::Borrowed(conditions),
        ..EvaluationRequest::new(content, attributes)
    })
    .evaluate()
}
