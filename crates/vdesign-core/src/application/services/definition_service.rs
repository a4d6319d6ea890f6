//! Definition Service - compile, describe and evaluate options bags.

use tracing::{info, instrument};

use crate::{
    application::{ApplicationError, ManifestRenderer, OptionsSource},
    domain::{ComponentDefinition, ComponentOptions, Manifest, Map, Value, compile_definition},
    error::VdesignResult,
};

/// Service for definition use cases.
pub struct DefinitionService {
    source: Box<dyn OptionsSource>,
}

impl DefinitionService {
    pub fn new(source: Box<dyn OptionsSource>) -> Self {
        Self { source }
    }

    /// Compile an options bag.
    #[instrument(skip_all)]
    pub fn compile(&self, options: ComponentOptions) -> VdesignResult<ComponentDefinition> {
        Ok(compile_definition(options)?)
    }

    /// Load a named bag from the source and compile it.
    #[instrument(skip(self))]
    pub fn load(&self, name: &str) -> VdesignResult<ComponentDefinition> {
        let raw = self.source.load(name)?;
        let options = ComponentOptions::from_value(raw)?;
        let def = self.compile(options)?;
        info!(
            props = def.props.len(),
            mixins = def.mixins.len(),
            "definition compiled"
        );
        Ok(def)
    }

    /// Manifest of a named bag.
    pub fn describe(&self, name: &str) -> VdesignResult<Manifest> {
        Ok(Manifest::from_definition(&self.load(name)?))
    }

    /// Render the manifest of a named bag.
    #[instrument(skip(self, renderer), fields(format = renderer.format_name()))]
    pub fn render(&self, name: &str, renderer: &dyn ManifestRenderer) -> VdesignResult<String> {
        renderer.render(&self.describe(name)?)
    }

    /// Evaluate one derived value of a named bag against a fresh instance
    /// seeded with the definition's initial state and `context`.
    #[instrument(skip(self, context))]
    pub fn evaluate(&self, name: &str, computed: &str, context: Map) -> VdesignResult<Value> {
        let def = self.load(name)?;
        let derived = def
            .derived(computed)
            .ok_or_else(|| ApplicationError::UnknownComputed {
                name: computed.to_owned(),
            })?;
        Ok(derived.get(&def.instantiate(context)))
    }

    /// Names the source can load.
    pub fn available(&self) -> VdesignResult<Vec<String>> {
        self.source.list()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockManifestRenderer, MockOptionsSource};
    use crate::domain::DomainError;
    use crate::error::VdesignError;
    use mockall::predicate::eq;

    fn service_with(raw: Value) -> DefinitionService {
        let mut source = MockOptionsSource::new();
        source
            .expect_load()
            .with(eq("button"))
            .returning(move |_| Ok(raw.clone()));
        DefinitionService::new(Box::new(source))
    }

    fn button() -> Value {
        Value::object([
            (
                "designs",
                Value::object([("color", Value::object([("light", true)])), ("rounded", true.into())]),
            ),
            ("props", Value::object([("label", "")])),
        ])
    }

    #[test]
    fn load_compiles_source_bag() {
        let def = service_with(button()).load("button").unwrap();
        let designs: Vec<_> = def.fragments().map(|f| f.design).collect();
        assert_eq!(designs, ["color", "rounded"]);
        assert!(def.props.contains_key("label"));
    }

    #[test]
    fn evaluate_uses_initial_state_and_context() {
        let service = service_with(button());
        let context = Map::from_iter([("color".to_owned(), Value::from("primary"))]);
        let value = service.evaluate("button", "Color", context).unwrap();
        assert_eq!(value, Value::from("text-primary bg-primary bg-opacity-10"));

        let value = service.evaluate("button", "Rounded", Map::new()).unwrap();
        assert_eq!(value, Value::from("rounded-none"));
    }

    #[test]
    fn evaluate_unknown_computed() {
        let err = service_with(button())
            .evaluate("button", "Nope", Map::new())
            .unwrap_err();
        assert!(matches!(
            err,
            VdesignError::Application(ApplicationError::UnknownComputed { .. })
        ));
    }

    #[test]
    fn domain_errors_propagate() {
        let raw = Value::object([("designs", Value::object([("sparkle", true)]))]);
        let err = service_with(raw).load("button").unwrap_err();
        assert!(matches!(err, VdesignError::Domain(DomainError::UnknownDesign { .. })));
    }

    #[test]
    fn render_delegates_to_renderer() {
        let mut renderer = MockManifestRenderer::new();
        renderer.expect_format_name().return_const("plain");
        renderer
            .expect_render()
            .times(1)
            .returning(|m| Ok(m.design_names().join(",")));

        let out = service_with(button()).render("button", &renderer).unwrap();
        assert_eq!(out, "color,rounded");
    }
}
