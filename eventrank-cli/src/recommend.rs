//! Recommend command implementation for the EventRank CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use eventrank_core::{Event, EventSimilarity, User};
use eventrank_scorer::{
    HeuristicScorer, RecommendOptions, Recommender, ScoreBreakdown, ScoreWeights,
};
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::fs::{load_json, require_file};
use crate::{
    ARG_RECOMMEND_EVENTS, ARG_RECOMMEND_EXPLAIN, ARG_RECOMMEND_LIMIT, ARG_RECOMMEND_SIMILARITY,
    ARG_RECOMMEND_USER, ARG_RECOMMEND_WEIGHTS, CliError, ENV_RECOMMEND_EVENTS, ENV_RECOMMEND_USER,
    write_output,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "recommend",
    long_about = "Rank candidate events for a user. The user, the candidate \
                 events and the optional similarity map are JSON files whose \
                 paths can come from CLI flags, configuration files, or \
                 environment variables.",
    about = "Rank candidate events for a user"
)]
#[ortho_config(prefix = "EVENTRANK")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON file describing the user.
    #[arg(long = ARG_RECOMMEND_USER, value_name = "path")]
    #[serde(default)]
    pub(crate) user: Option<Utf8PathBuf>,
    /// Path to a JSON array of candidate events.
    #[arg(long = ARG_RECOMMEND_EVENTS, value_name = "path")]
    #[serde(default)]
    pub(crate) events: Option<Utf8PathBuf>,
    /// Path to a JSON object mapping event ids to similar event ids.
    #[arg(long = ARG_RECOMMEND_SIMILARITY, value_name = "path")]
    #[serde(default)]
    pub(crate) similarity: Option<Utf8PathBuf>,
    /// Path to a JSON object overriding the scoring weights.
    #[arg(long = ARG_RECOMMEND_WEIGHTS, value_name = "path")]
    #[serde(default)]
    pub(crate) weights: Option<Utf8PathBuf>,
    /// Maximum number of events to print. Negative values print nothing.
    #[arg(
        long = ARG_RECOMMEND_LIMIT,
        value_name = "count",
        allow_negative_numbers = true
    )]
    #[serde(default)]
    pub(crate) limit: Option<i64>,
    /// Include each event's score and per-factor breakdown.
    #[arg(
        long = ARG_RECOMMEND_EXPLAIN,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    #[serde(default)]
    pub(crate) explain: Option<bool>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    /// Path to the user JSON file.
    pub(crate) user: Utf8PathBuf,
    /// Path to the candidate events JSON file.
    pub(crate) events: Utf8PathBuf,
    /// Path to the similarity map, when one was supplied.
    pub(crate) similarity: Option<Utf8PathBuf>,
    /// Path to custom scoring weights, when supplied.
    pub(crate) weights: Option<Utf8PathBuf>,
    /// Ranking options derived from `--limit`.
    pub(crate) options: RecommendOptions,
    /// Whether to print score breakdowns.
    pub(crate) explain: bool,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_file(&self.user, ARG_RECOMMEND_USER)?;
        require_file(&self.events, ARG_RECOMMEND_EVENTS)?;
        if let Some(path) = &self.similarity {
            require_file(path, ARG_RECOMMEND_SIMILARITY)?;
        }
        if let Some(path) = &self.weights {
            require_file(path, ARG_RECOMMEND_WEIGHTS)?;
        }
        Ok(())
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let user = args.user.ok_or(CliError::MissingArgument {
            field: ARG_RECOMMEND_USER,
            env: ENV_RECOMMEND_USER,
        })?;
        let events = args.events.ok_or(CliError::MissingArgument {
            field: ARG_RECOMMEND_EVENTS,
            env: ENV_RECOMMEND_EVENTS,
        })?;
        let options = args
            .limit
            .map_or_else(RecommendOptions::default, RecommendOptions::from_signed_limit);
        Ok(Self {
            user,
            events,
            similarity: args.similarity,
            weights: args.weights,
            options,
            explain: args.explain.unwrap_or(false),
        })
    }
}

/// One ranked event as printed by `--explain`.
#[derive(Debug, Serialize)]
pub(crate) struct ExplainedEvent<'a> {
    pub(crate) event: &'a Event,
    pub(crate) score: f64,
    pub(crate) breakdown: ScoreBreakdown,
}

/// Decoded inputs for a single `recommend` invocation.
#[derive(Debug)]
pub(crate) struct RecommendInputs {
    pub(crate) user: User,
    pub(crate) events: Vec<Event>,
    pub(crate) similarity: EventSimilarity,
    pub(crate) weights: ScoreWeights,
}

impl RecommendInputs {
    pub(crate) fn load(config: &RecommendConfig) -> Result<Self, CliError> {
        let user = load_json(&config.user, ARG_RECOMMEND_USER)?;
        let events: Vec<Event> = load_json(&config.events, ARG_RECOMMEND_EVENTS)?;
        let similarity = match &config.similarity {
            Some(path) => load_json(path, ARG_RECOMMEND_SIMILARITY)?,
            None => EventSimilarity::new(),
        };
        let weights = match &config.weights {
            Some(path) => load_json(path, ARG_RECOMMEND_WEIGHTS)?,
            None => ScoreWeights::default(),
        };
        debug!(
            "loaded {} candidate events and {} similarity entries",
            events.len(),
            similarity.len()
        );
        Ok(Self {
            user,
            events,
            similarity,
            weights,
        })
    }
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let config = resolve_recommend_config(args)?;
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(&config, &mut stdout)
}

pub(crate) fn run_recommend_with(
    config: &RecommendConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let inputs = RecommendInputs::load(config)?;
    let scorer =
        HeuristicScorer::new(inputs.weights).map_err(|source| CliError::InvalidWeights {
            path: config.weights.clone().unwrap_or_default(),
            source,
        })?;
    let recommender = Recommender::new(scorer);
    let ranked = recommender.rank(
        &inputs.user,
        &inputs.events,
        &inputs.similarity,
        config.options.limit,
    );

    let payload = if config.explain {
        let explained: Vec<ExplainedEvent<'_>> = ranked
            .iter()
            .map(|scored| ExplainedEvent {
                event: scored.event,
                score: scored.score,
                breakdown: recommender.scorer().breakdown(
                    &inputs.user,
                    scored.event,
                    &inputs.similarity,
                ),
            })
            .collect();
        serde_json::to_string_pretty(&explained)
    } else {
        let events: Vec<&Event> = ranked.iter().map(|scored| scored.event).collect();
        serde_json::to_string_pretty(&events)
    }
    .map_err(CliError::SerializeOutput)?;

    write_output(writer, &payload)
}

fn resolve_recommend_config(args: RecommendArgs) -> Result<RecommendConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
