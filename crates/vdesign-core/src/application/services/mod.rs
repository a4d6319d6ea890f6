pub mod definition_service;
pub mod design_service;

pub use definition_service::DefinitionService;
pub use design_service::{DesignInfo, DesignService};
