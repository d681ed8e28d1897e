//! Template families and variants

use colored::{Color, Colorize};

/// Marker inside a variant id selecting the SWC flavor of a bundled template
pub const SWC_MARKER: &str = "-swc";

/// How a variant is turned into a project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantKind {
    /// Files copied from `template-<id>` under the template root
    Bundled,
    /// Hand off to an external generator. The command contains a `TARGET_DIR`
    /// placeholder and is written for npm (`npm create ...` / `npm exec ...`).
    Delegating(&'static str),
}

/// A selectable flavor of a family (e.g. TypeScript vs JavaScript)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateVariant {
    pub id: &'static str,
    pub display_name: &'static str,
    pub color: Option<Color>,
    pub kind: VariantKind,
}

impl TemplateVariant {
    pub const fn bundled(id: &'static str, display_name: &'static str, color: Color) -> Self {
        Self {
            id,
            display_name,
            color: Some(color),
            kind: VariantKind::Bundled,
        }
    }

    pub const fn delegating(
        id: &'static str,
        display_name: &'static str,
        color: Option<Color>,
        command: &'static str,
    ) -> Self {
        Self {
            id,
            display_name,
            color,
            kind: VariantKind::Delegating(command),
        }
    }

    pub fn delegating_command(&self) -> Option<&'static str> {
        match self.kind {
            VariantKind::Delegating(command) => Some(command),
            VariantKind::Bundled => None,
        }
    }

    /// Display name painted in the variant color
    pub fn label(&self) -> String {
        paint(self.display_name, self.color)
    }
}

/// A framework with its ordered, non-empty list of variants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFamily {
    pub id: &'static str,
    pub display_name: &'static str,
    pub color: Option<Color>,
    pub variants: &'static [TemplateVariant],
}

impl TemplateFamily {
    /// A family whose only variant shares the family id has nothing to choose
    pub fn has_variant_choice(&self) -> bool {
        !matches!(self.variants, [only] if only.id == self.id)
    }

    pub fn variant(&self, id: &str) -> Option<&TemplateVariant> {
        self.variants.iter().find(|v| v.id == id)
    }

    pub fn label(&self) -> String {
        paint(self.display_name, self.color)
    }
}

/// Immutable registry of every template the scaffolder knows about
#[derive(Debug, Clone, Copy)]
pub struct TemplateCatalog {
    families: &'static [TemplateFamily],
}

impl TemplateCatalog {
    pub const fn new(families: &'static [TemplateFamily]) -> Self {
        Self { families }
    }

    /// Families in prompt order
    pub fn families(&self) -> &'static [TemplateFamily] {
        self.families
    }

    pub fn family(&self, id: &str) -> Option<&'static TemplateFamily> {
        self.families.iter().find(|f| f.id == id)
    }

    /// Every variant id across every family, in order
    pub fn flattened_ids(&self) -> Vec<&'static str> {
        self.families
            .iter()
            .flat_map(|f| f.variants.iter().map(|v| v.id))
            .collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find_variant(id).is_some()
    }

    pub fn find_variant(&self, id: &str) -> Option<&'static TemplateVariant> {
        self.families
            .iter()
            .flat_map(|f| f.variants.iter())
            .find(|v| v.id == id)
    }

    /// Bundled template ids as `<ts-id>  <js-id>` lines for help output
    pub fn help_listing(&self) -> String {
        let mut lines = Vec::new();

        for family in self.families {
            let bundled: Vec<&str> = family
                .variants
                .iter()
                .filter(|v| v.kind == VariantKind::Bundled)
                .map(|v| v.id)
                .collect();

            for id in &bundled {
                let Some(js) = id.strip_suffix("-ts") else {
                    continue;
                };
                let line = if bundled.contains(&js) {
                    format!("{:<15}{}", id, js)
                } else {
                    id.to_string()
                };
                lines.push(paint(&line, family.color));
            }
        }

        lines.join("\n")
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Split the SWC marker off a template id: `react-swc-ts` -> (`react-ts`, true)
pub fn split_swc(id: &str) -> (String, bool) {
    if id.contains(SWC_MARKER) {
        (id.replacen(SWC_MARKER, "", 1), true)
    } else {
        (id.to_string(), false)
    }
}

fn paint(text: &str, color: Option<Color>) -> String {
    match color {
        Some(color) => text.color(color).to_string(),
        None => text.to_string(),
    }
}

const TS: &str = "TypeScript";
const JS: &str = "JavaScript";

const FAMILIES: &[TemplateFamily] = &[
    TemplateFamily {
        id: "vanilla",
        display_name: "Vanilla",
        color: Some(Color::Yellow),
        variants: &[
            TemplateVariant::bundled("vanilla-ts", TS, Color::Blue),
            TemplateVariant::bundled("vanilla", JS, Color::Yellow),
        ],
    },
    TemplateFamily {
        id: "vue",
        display_name: "Vue",
        color: Some(Color::Green),
        variants: &[
            TemplateVariant::bundled("vue-ts", TS, Color::Blue),
            TemplateVariant::bundled("vue", JS, Color::Yellow),
            TemplateVariant::delegating(
                "custom-create-vue",
                "Customize with create-vue ↗",
                Some(Color::Green),
                "npm create vue@latest TARGET_DIR",
            ),
            TemplateVariant::delegating(
                "custom-nuxt",
                "Nuxt ↗",
                Some(Color::BrightGreen),
                "npm exec nuxi init TARGET_DIR",
            ),
        ],
    },
    TemplateFamily {
        id: "react",
        display_name: "React",
        color: Some(Color::Cyan),
        variants: &[
            TemplateVariant::bundled("react-ts", TS, Color::Blue),
            TemplateVariant::bundled("react-swc-ts", "TypeScript + SWC", Color::Blue),
            TemplateVariant::bundled("react", JS, Color::Yellow),
            TemplateVariant::bundled("react-swc", "JavaScript + SWC", Color::Yellow),
            TemplateVariant::delegating(
                "custom-remix",
                "Remix ↗",
                Some(Color::Cyan),
                "npm create remix@latest TARGET_DIR",
            ),
        ],
    },
    TemplateFamily {
        id: "preact",
        display_name: "Preact",
        color: Some(Color::Magenta),
        variants: &[
            TemplateVariant::bundled("preact-ts", TS, Color::Blue),
            TemplateVariant::bundled("preact", JS, Color::Yellow),
            TemplateVariant::delegating(
                "custom-create-preact",
                "Customize with create-preact ↗",
                Some(Color::Magenta),
                "npm create preact@latest TARGET_DIR",
            ),
        ],
    },
    TemplateFamily {
        id: "lit",
        display_name: "Lit",
        color: Some(Color::BrightRed),
        variants: &[
            TemplateVariant::bundled("lit-ts", TS, Color::Blue),
            TemplateVariant::bundled("lit", JS, Color::Yellow),
        ],
    },
    TemplateFamily {
        id: "svelte",
        display_name: "Svelte",
        color: Some(Color::Red),
        variants: &[
            TemplateVariant::bundled("svelte-ts", TS, Color::Blue),
            TemplateVariant::bundled("svelte", JS, Color::Yellow),
            TemplateVariant::delegating(
                "custom-svelte-kit",
                "SvelteKit ↗",
                Some(Color::Red),
                "npm create svelte@latest TARGET_DIR",
            ),
        ],
    },
    TemplateFamily {
        id: "solid",
        display_name: "Solid",
        color: Some(Color::Blue),
        variants: &[
            TemplateVariant::bundled("solid-ts", TS, Color::Blue),
            TemplateVariant::bundled("solid", JS, Color::Yellow),
        ],
    },
    TemplateFamily {
        id: "qwik",
        display_name: "Qwik",
        color: Some(Color::BrightBlue),
        variants: &[
            TemplateVariant::bundled("qwik-ts", TS, Color::BrightBlue),
            TemplateVariant::bundled("qwik", JS, Color::Yellow),
            TemplateVariant::delegating(
                "custom-qwik-city",
                "QwikCity ↗",
                Some(Color::BrightBlue),
                "npm create qwik@latest basic TARGET_DIR",
            ),
        ],
    },
    TemplateFamily {
        id: "others",
        display_name: "Others",
        color: None,
        variants: &[
            TemplateVariant::delegating(
                "create-vite-extra",
                "create-vite-extra ↗",
                None,
                "npm create vite-extra@latest TARGET_DIR",
            ),
            TemplateVariant::delegating(
                "create-electron-vite",
                "create-electron-vite ↗",
                None,
                "npm create electron-vite@latest TARGET_DIR",
            ),
        ],
    },
];

impl TemplateCatalog {
    /// The Vite framework catalog
    pub const fn builtin() -> Self {
        Self::new(FAMILIES)
    }
}
