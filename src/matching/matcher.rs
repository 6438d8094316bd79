use crate::{
    graph::{Graph, GraphError, Morphism},
    matching::{formulate, formulate_typed, legacy, reconstruct, NameGenerator},
};
use derive_more::Display;
use log::{debug, info};
use std::str::FromStr;

/// The search used for untyped matching.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    #[display(fmt = "csp")]
    Csp,
    #[display(fmt = "legacy")]
    Legacy,
}

#[derive(Debug, Display, PartialEq)]
#[display(fmt = "unknown engine {}", _0)]
pub struct UnknownEngine(String);

impl std::error::Error for UnknownEngine {}

impl FromStr for Engine {
    type Err = UnknownEngine;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csp" => Ok(Engine::Csp),
            "legacy" => Ok(Engine::Legacy),
            _ => Err(UnknownEngine(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatcherConfig {
    engine: Engine,
    state_hashing: bool,
}

impl MatcherConfig {
    pub fn engine(mut self, engine: Engine) -> Self {
        self.engine = engine;
        self
    }

    /// Only affects [`Engine::Legacy`].
    pub fn state_hashing(mut self, state_hashing: bool) -> Self {
        self.state_hashing = state_hashing;
        self
    }

    pub fn get_engine(&self) -> Engine {
        self.engine
    }

    pub fn get_state_hashing(&self) -> bool {
        self.state_hashing
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            engine: Engine::Csp,
            state_hashing: true,
        }
    }
}

/// Finds structure preserving maps from a pattern graph into a host graph.
///
/// Every produced morphism gets a fresh name from the matcher's counter, so
/// the producing operations take `&mut self`.
#[derive(Debug, Clone)]
pub struct GraphMatcher {
    config: MatcherConfig,
    names: NameGenerator,
    legacy_names: NameGenerator,
}

impl GraphMatcher {
    pub fn new(config: MatcherConfig) -> Self {
        Self {
            config,
            names: NameGenerator::new("match"),
            legacy_names: NameGenerator::new("match#"),
        }
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// All matches of `pattern` in `host`, one per distinct mapping.
    pub fn all_matches(
        &mut self,
        pattern: &Graph,
        host: &Graph,
        injective: bool,
    ) -> Result<Vec<Morphism>, GraphError> {
        if pattern.is_empty() {
            return Ok(vec![]);
        }
        let matches = match self.config.engine {
            Engine::Csp => formulate(pattern, host, injective)
                .solve_all()
                .iter()
                .map(|solution| reconstruct(solution, pattern, host, &mut self.names))
                .collect::<Result<Vec<_>, _>>()?,
            Engine::Legacy => legacy::find_matches(
                pattern,
                host,
                injective,
                self.config.state_hashing,
            )
            .into_iter()
            .map(|binding| self.legacy_morphism(binding, pattern, host))
            .collect::<Result<Vec<_>, _>>()?,
        };
        info!(
            "{} matches of {} in {} ({} engine)",
            matches.len(),
            pattern.name(),
            host.name(),
            self.config.engine
        );
        Ok(matches)
    }

    /// Some match of `pattern` in `host`, the first one the search finds.
    pub fn random_match(
        &mut self,
        pattern: &Graph,
        host: &Graph,
        injective: bool,
    ) -> Result<Option<Morphism>, GraphError> {
        if pattern.is_empty() {
            return Ok(None);
        }
        match self.config.engine {
            Engine::Csp => formulate(pattern, host, injective)
                .solve_one()
                .map(|solution| reconstruct(&solution, pattern, host, &mut self.names))
                .transpose(),
            Engine::Legacy => {
                legacy::find_first_match(pattern, host, injective, self.config.state_hashing)
                    .map(|binding| self.legacy_morphism(binding, pattern, host))
                    .transpose()
            }
        }
    }

    pub fn exist_match(&self, pattern: &Graph, host: &Graph, injective: bool) -> bool {
        if pattern.is_empty() {
            return false;
        }
        match self.config.engine {
            Engine::Csp => formulate(pattern, host, injective).solve_one().is_some(),
            Engine::Legacy => {
                legacy::find_first_match(pattern, host, injective, self.config.state_hashing)
                    .is_some()
            }
        }
    }

    /// All non-injective matches of the typed pattern `P -> T` in the typed
    /// host `H -> T` that commute with the typings.
    ///
    /// The results are morphisms `P -> H`. Typed graphs over different type
    /// graphs have no matches.
    pub fn all_typed_matches(
        &mut self,
        typed_pattern: &Morphism,
        typed_host: &Morphism,
    ) -> Result<Vec<Morphism>, GraphError> {
        let (pattern, host) = (typed_pattern.domain(), typed_host.domain());
        if typed_pattern.codomain() != typed_host.codomain() {
            debug!(
                "{} and {} are typed over different graphs",
                typed_pattern.name(),
                typed_host.name()
            );
            return Ok(vec![]);
        }
        if pattern.is_empty() {
            return Ok(vec![]);
        }
        let (relevant, projection) = typed_pattern.pullback(typed_host)?;
        debug!("pullback {} has {} elements", relevant.domain().name(), relevant.domain().len());
        let matches = formulate_typed(&relevant, &projection, false)
            .solve_all()
            .iter()
            .map(|solution| reconstruct(solution, pattern, host, &mut self.names))
            .collect::<Result<Vec<_>, _>>()?;
        info!(
            "{} typed matches of {} in {}",
            matches.len(),
            typed_pattern.name(),
            typed_host.name()
        );
        Ok(matches)
    }

    fn legacy_morphism(
        &mut self,
        binding: legacy::Binding,
        pattern: &Graph,
        host: &Graph,
    ) -> Result<Morphism, GraphError> {
        Morphism::new(self.legacy_names.fresh(), pattern.clone(), host.clone(), binding)
    }
}

impl Default for GraphMatcher {
    fn default() -> Self {
        Self::new(MatcherConfig::default())
    }
}
