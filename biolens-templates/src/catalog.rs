//! The fixed table of templates making up the BioLens solution.
//!
//! Entries are grouped by layer and listed in generation order. Content is
//! embedded from the `templates/` tree, which mirrors the output layout.

use indexmap::IndexMap;

use crate::{Error, Layer, Result, Template};

macro_rules! template {
    ($key:literal, $layer:ident, $path:literal) => {
        Template {
            key: $key,
            layer: Layer::$layer,
            path: $path,
            content: include_str!(concat!("../templates/", $path)),
        }
    };
}

static TEMPLATES: &[Template] = &[
    // Domain
    template!("domain/enums", Domain, "src/BioLens.Domain/Enums/Enums.cs"),
    template!(
        "domain/entities/patient",
        Domain,
        "src/BioLens.Domain/Entities/Patient.cs"
    ),
    template!(
        "domain/entities/diagnostic_case",
        Domain,
        "src/BioLens.Domain/Entities/DiagnosticCase.cs"
    ),
    template!(
        "domain/value_objects",
        Domain,
        "src/BioLens.Domain/ValueObjects/ValueObjects.cs"
    ),
    template!("domain/events", Domain, "src/BioLens.Domain/Events/DomainEvents.cs"),
    template!(
        "domain/repositories",
        Domain,
        "src/BioLens.Domain/Repositories/IRepositories.cs"
    ),
    template!("domain/common", Domain, "src/BioLens.Domain/Common/BaseTypes.cs"),
    // Agents
    template!("agents/core/agent_base", Agents, "src/BioLens.Agents/Core/AgentBase.cs"),
    template!(
        "agents/core/diagnostic_coordinator",
        Agents,
        "src/BioLens.Agents/Core/DiagnosticCoordinatorAgent.cs"
    ),
    template!(
        "agents/specialized/image_analysis",
        Agents,
        "src/BioLens.Agents/Core/ImageAnalysisAgent.cs"
    ),
    template!(
        "agents/specialized/audio_transcription",
        Agents,
        "src/BioLens.Agents/Core/AudioTranscriptionAgent.cs"
    ),
    template!(
        "agents/specialized/medical_reasoning",
        Agents,
        "src/BioLens.Agents/Core/MedicalReasoningAgent.cs"
    ),
    template!(
        "agents/specialized/treatment_planner",
        Agents,
        "src/BioLens.Agents/Core/TreatmentPlannerAgent.cs"
    ),
    template!(
        "agents/configuration",
        Agents,
        "src/BioLens.Agents/Configuration/ServiceConfiguration.cs"
    ),
    // Application
    template!(
        "application/commands",
        Application,
        "src/BioLens.Application/Commands/Commands.cs"
    ),
    template!(
        "application/handlers",
        Application,
        "src/BioLens.Application/Handlers/CommandHandlers.cs"
    ),
    // Infrastructure
    template!(
        "infrastructure/gemini_service",
        Infrastructure,
        "src/BioLens.Infrastructure/AI/GeminiAIService.cs"
    ),
    template!(
        "infrastructure/persistence",
        Infrastructure,
        "src/BioLens.Infrastructure/Persistence/BioLensDbContext.cs"
    ),
    // Examples
    template!("examples/program", Examples, "examples/BioLens.Example/Program.cs"),
    // Tests
    template!("tests/domain", Tests, "tests/BioLens.Domain.Tests/EntityTests.cs"),
    template!("tests/agents", Tests, "tests/BioLens.Agents.Tests/AgentTests.cs"),
];

/// All templates in generation order.
pub fn catalog() -> &'static [Template] {
    TEMPLATES
}

/// Keyed view over the template table, preserving generation order.
#[derive(Debug, Clone)]
pub struct Catalog {
    index: IndexMap<&'static str, &'static Template>,
}

impl Catalog {
    /// Index the built-in templates.
    pub fn new() -> Self {
        Self::from_templates(TEMPLATES)
    }

    fn from_templates(templates: &'static [Template]) -> Self {
        let index = templates.iter().map(|t| (t.key, t)).collect();
        Self { index }
    }

    /// Look up a template by its logical key.
    pub fn get(&self, key: &str) -> Result<&'static Template> {
        self.index
            .get(key)
            .copied()
            .ok_or_else(|| Error::unknown_template(key, self.index.keys().copied()))
    }

    /// Iterate over all templates in generation order.
    pub fn iter(&self) -> impl Iterator<Item = &'static Template> + '_ {
        self.index.values().copied()
    }

    /// Templates of one layer, in generation order.
    pub fn by_layer(&self, layer: Layer) -> impl Iterator<Item = &'static Template> + '_ {
        self.iter().filter(move |t| t.layer == layer)
    }

    /// Distinct layers present, in generation order.
    pub fn layers(&self) -> Vec<Layer> {
        let mut layers: Vec<Layer> = Vec::new();
        for template in self.iter() {
            if layers.last() != Some(&template.layer) {
                layers.push(template.layer);
            }
        }
        layers
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
