use alloc::string::String;

use crate::RevealerOptions;

/// Declarative description of the decorative wrapper shown around lazily
/// revealed content: a named effect (e.g. "blur") and/or a placeholder image
/// kept until the content's own load-completion signal fires.
///
/// "Visible" (placeholder swapped for real markup) and "loaded" (the real
/// content finished loading) are two independent one-shot transitions; the
/// wrapper exists to bridge the gap between them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WrapperEffect {
    pub effect: Option<String>,
    pub placeholder_src: Option<String>,
}

/// Decides whether a decorative wrapper is wanted for this configuration.
///
/// A wrapper is wanted iff an effect name or a placeholder source is
/// configured and the instance is not eager-visible; an eagerly shown
/// instance never displays the placeholder treatment.
pub fn wrapper_effect(options: &RevealerOptions) -> Option<WrapperEffect> {
    if options.visible_by_default {
        return None;
    }
    if options.effect.is_none() && options.placeholder_src.is_none() {
        return None;
    }
    Some(WrapperEffect {
        effect: options.effect.clone(),
        placeholder_src: options.placeholder_src.clone(),
    })
}
