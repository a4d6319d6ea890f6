//! Trait fragments: the compiled output of one design.

use indexmap::IndexMap;

use crate::domain::entities::descriptor::{
    DataFactory, DerivedDescriptor, InjectDescriptor, PropDescriptor, ProvideFactory,
};
use crate::domain::value::Callable;

/// A self-contained, mixin-shaped unit. Fragments are never merged with
/// each other here; the host framework's mixin composition does that.
#[derive(Debug, Clone, Default)]
pub struct TraitFragment {
    /// Registry name of the design that produced this fragment.
    pub design: &'static str,
    pub props: IndexMap<String, PropDescriptor>,
    pub computed: IndexMap<String, DerivedDescriptor>,
    pub methods: IndexMap<String, Callable>,
    pub emits: Vec<String>,
    pub data: Option<DataFactory>,
    pub provide: Option<ProvideFactory>,
    pub inject: IndexMap<String, InjectDescriptor>,
}

impl TraitFragment {
    pub fn new(design: &'static str) -> Self {
        Self {
            design,
            ..Self::default()
        }
    }

    pub fn with_props(mut self, props: IndexMap<String, PropDescriptor>) -> Self {
        self.props = props;
        self
    }

    pub fn with_computed(mut self, computed: IndexMap<String, DerivedDescriptor>) -> Self {
        self.computed = computed;
        self
    }

    pub fn with_methods(mut self, methods: IndexMap<String, Callable>) -> Self {
        self.methods = methods;
        self
    }

    pub fn with_emits(mut self, emits: Vec<String>) -> Self {
        self.emits = emits;
        self
    }

    pub fn with_data(mut self, data: DataFactory) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_provide(mut self, provide: ProvideFactory) -> Self {
        self.provide = Some(provide);
        self
    }

    pub fn with_inject(mut self, inject: IndexMap<String, InjectDescriptor>) -> Self {
        self.inject = inject;
        self
    }
}
