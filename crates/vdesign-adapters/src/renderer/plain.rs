use std::fmt::Write;

use tracing::instrument;
use vdesign_core::{
    application::ports::ManifestRenderer,
    domain::{
        Manifest,
        entities::manifest::{MemberSet, MixinEntry},
    },
    error::VdesignResult,
};

/// Human-readable outline of a manifest.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl PlainRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ManifestRenderer for PlainRenderer {
    #[instrument(skip_all)]
    fn render(&self, manifest: &Manifest) -> VdesignResult<String> {
        let mut out = String::new();
        write_members(&mut out, &manifest.members, "");
        if !manifest.extra.is_empty() {
            line(&mut out, "", "extra", &manifest.extra.join(", "));
        }
        for mixin in &manifest.mixins {
            match mixin {
                MixinEntry::Design { design, members } => {
                    out.push_str(&format!("mixin {design}\n"));
                    write_members(&mut out, members, "  ");
                }
                MixinEntry::Options { keys } => {
                    out.push_str(&format!("mixin options [{}]\n", keys.join(", ")));
                }
            }
        }
        Ok(out)
    }

    fn format_name(&self) -> &'static str {
        "plain"
    }
}

fn write_members(out: &mut String, members: &MemberSet, indent: &str) {
    for prop in &members.props {
        let mut desc = prop.type_tag.to_string();
        if let Some(default) = &prop.default {
            let _ = write!(desc, " = {default}");
        }
        if prop.factory {
            desc.push_str(" (factory)");
        }
        if prop.required {
            desc.push_str(" (required)");
        }
        line(out, indent, &format!("prop {}", prop.name), &desc);
    }
    for computed in &members.computed {
        let desc = match &computed.source {
            Some(source) => format!("{} <- {source}", computed.mode),
            None => computed.mode.clone(),
        };
        line(out, indent, &format!("computed {}", computed.name), &desc);
    }
    let lists = [
        ("methods", &members.methods),
        ("emits", &members.emits),
        ("data", &members.data),
        ("provide", &members.provide),
        ("inject", &members.inject),
    ];
    for (label, names) in lists {
        if !names.is_empty() {
            line(out, indent, label, &names.join(", "));
        }
    }
}

fn line(out: &mut String, indent: &str, label: &str, value: &str) {
    let _ = writeln!(out, "{indent}{label:<20} {value}");
}
