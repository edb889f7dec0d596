use fxhash::FxHashMap;
use scoped_css_core::{ClassMap, RawHtml};

use crate::css::{fingerprint, rewrite_classes};

/// Marker emitted instead of the CSS text when a block with the same
/// fingerprint was already output during this render, outside production.
const DEV_SUPPRESSION_MARKER: &str = " <!-- previously output --> ";

/// Result of scoping one CSS block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopedCss {
    /// The rewritten CSS, or the suppression placeholder if a block with
    /// the same fingerprint was already emitted by this context.
    pub css: RawHtml,
    /// Original class name → namespaced class name.
    pub classes: ClassMap,
    /// The fingerprint used as the class-name namespace.
    pub prefix: String,
}

/// Per-render scoping state.
///
/// Owns the fingerprint → [`ClassMap`] cache that suppresses duplicate
/// CSS output within one render. Create one context per render and drop
/// it when the render finishes; sharing a context across concurrent
/// renders would let them corrupt each other's memoized maps.
#[derive(Debug)]
pub struct RenderContext {
    is_prod: bool,
    emitted: FxHashMap<String, ClassMap>,
}

impl RenderContext {
    pub fn new(is_prod: bool) -> Self {
        Self {
            is_prod,
            emitted: FxHashMap::default(),
        }
    }

    /// Scopes a block of raw CSS text.
    ///
    /// The first call for a given content emits the rewritten CSS; later
    /// calls with byte-identical content reuse the cached class map and
    /// emit only a placeholder (empty in production, a human-readable
    /// marker otherwise).
    pub fn scope_css(&mut self, css_text: &str) -> ScopedCss {
        let prefix = fingerprint(css_text);

        if let Some(classes) = self.emitted.get(&prefix) {
            let placeholder = if self.is_prod {
                ""
            } else {
                DEV_SUPPRESSION_MARKER
            };
            return ScopedCss {
                css: RawHtml::from(placeholder),
                classes: classes.clone(),
                prefix,
            };
        }

        let (rewritten, classes) = rewrite_classes(css_text, &prefix);
        self.emitted.insert(prefix.clone(), classes.clone());

        ScopedCss {
            css: RawHtml::new(rewritten),
            classes,
            prefix,
        }
    }

    /// Scopes a template-captured CSS block.
    ///
    /// The closure stands in for the host framework's capture capability:
    /// it evaluates the template-authored block and returns its rendered
    /// text, which is then scoped like any other CSS text.
    pub fn scope_block(&mut self, block: impl FnOnce() -> String) -> ScopedCss {
        let css_text = block();
        self.scope_css(&css_text)
    }
}
