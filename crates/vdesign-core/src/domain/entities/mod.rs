pub mod definition;
pub mod descriptor;
pub mod fragment;
pub mod manifest;

pub use crate::domain::DomainError;
pub use definition::{ComponentDefinition, ComponentOptions, Mixin, PropSpec};
pub use descriptor::{
    DataFactory, DerivedDescriptor, InjectDescriptor, PropDefault, PropDescriptor, Provided,
    ProvideFactory,
};
pub use fragment::TraitFragment;
pub use manifest::Manifest;
