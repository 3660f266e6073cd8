//! Content Mapper
//!
//! Composition of the pieces a caller needs to go from a content name to
//! typed records: a cached content document, a record schema, the caller's
//! conditions and a match policy.

use crate::binder::RecordSchema;
use crate::config::ContentConfig;
use crate::error::{ContentError, EvaluationError};
use crate::eval::{ContentEvaluator, EvaluationRequest, Evaluator, MatchPolicy};
use crate::loader::{ContentCache, ContentLocator};
use crate::types::{ConditionMap, ResultRecord};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::marker::PhantomData;
use std::path::PathBuf;
use tracing::{debug, instrument};

/// Produces typed records from content.
pub trait Mapper<R> {
    fn execute(&self) -> Result<Vec<R>, ContentError>;
}

/// Maps one content document onto records of type `R`.
#[derive(Debug)]
pub struct ContentMapper<R> {
    content_name: String,
    cache: ContentCache,
    schema: RecordSchema,
    conditions: ConditionMap,
    policy: MatchPolicy,
    _record: PhantomData<fn() -> R>,
}

impl<R: DeserializeOwned> ContentMapper<R> {
    /// Mapper for the content document named `content_name` under the
    /// configured root and package.
    pub fn new(
        config: &ContentConfig,
        content_name: &str,
        schema: RecordSchema,
    ) -> Result<Self, ContentError> {
        let path = ContentLocator::from_config(config).path_for(content_name)?;
        Ok(Self::at_path(content_name, path, schema))
    }

    /// Mapper whose content name is inferred from a mapper name by stripping
    /// the configured suffix: `GreetingMapper` reads `Greeting.json`.
    pub fn for_mapper_name(
        config: &ContentConfig,
        mapper_name: &str,
        schema: RecordSchema,
    ) -> Result<Self, ContentError> {
        Self::new(config, &config.content_name_for(mapper_name), schema)
    }

    /// Mapper over an explicit content file.
    pub fn at_path(content_name: &str, path: impl Into<PathBuf>, schema: RecordSchema) -> Self {
        Self {
            content_name: content_name.to_string(),
            cache: ContentCache::new(path),
            schema,
            conditions: ConditionMap::new(),
            policy: MatchPolicy::default(),
            _record: PhantomData,
        }
    }

    pub fn with_conditions(mut self, conditions: ConditionMap) -> Self {
        self.conditions = conditions;
        self
    }

    pub fn with_condition(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.conditions.insert(key.into(), value.into());
        self
    }

    pub fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace a single condition value between executions.
    pub fn set_condition(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.conditions.insert(key.into(), value.into());
    }

    pub fn content_name(&self) -> &str {
        &self.content_name
    }

    pub fn conditions(&self) -> &ConditionMap {
        &self.conditions
    }

    /// Flat records before binding.
    pub fn records(&self) -> Result<Vec<ResultRecord>, ContentError> {
        let content = self.cache.get()?;
        let declared = content.result_type().map_err(EvaluationError::from)?;
        self.schema.check_result_type(declared)?;

        let attributes = self.schema.attributes();
        let records = ContentEvaluator::new(EvaluationRequest {
            content: &content,
            attributes: &attributes,
            conditions: Cow::Borrowed(&self.conditions),
            policy: self.policy,
        })
        .evaluate()?;
        Ok(records)
    }
}

impl<R: DeserializeOwned> Mapper<R> for ContentMapper<R> {
    #[instrument(level = "debug", skip(self), fields(content = %self.content_name))]
    fn execute(&self) -> Result<Vec<R>, ContentError> {
        let records = self.records()?;
        let bound = self.schema.bind::<R>(&records)?;
        debug!(records = bound.len(), "Content mapped");
        Ok(bound)
    }
}
