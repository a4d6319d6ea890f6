//! Design Service - registry queries.

use serde::Serialize;

use crate::{
    domain::{
        Value,
        entities::manifest::MemberSet,
        registry::{self, DESIGN_REGISTRY},
    },
    error::VdesignResult,
};

/// Registry entry for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DesignInfo {
    pub name: &'static str,
    pub config: &'static str,
    pub summary: &'static str,
}

/// Service for design registry queries.
#[derive(Debug, Default, Clone, Copy)]
pub struct DesignService;

impl DesignService {
    pub fn new() -> Self {
        Self
    }

    /// All built-in designs, in registry order.
    pub fn list(&self) -> Vec<DesignInfo> {
        DESIGN_REGISTRY
            .iter()
            .map(|def| DesignInfo {
                name: def.name,
                config: def.config.as_str(),
                summary: def.summary,
            })
            .collect()
    }

    /// Members one design produces with `config` (`None` for defaults).
    pub fn inspect(&self, name: &str, config: Option<&Value>) -> VdesignResult<MemberSet> {
        let fragment = registry::generate(name, config)?;
        Ok(MemberSet::from_fragment(&fragment))
    }
}
