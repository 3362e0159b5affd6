//! Labels whose key depends on page state rather than on a static marker.

use crate::binding::markers::{ARGS_ATTR, I18N_ATTR, parse_args};
use crate::document::Document;
use crate::i18n::{Language, ReplacementSet, TranslationStore, translate};

/// Price-timeline caption re-rendered from its own marker and arguments.
pub const TIMELINE_LABEL_ID: &str = "timeline-label-5y";
/// Team card container.
pub const MEMBER_CLASS: &str = "member";
/// Collapsible card body; `hidden` means collapsed.
pub const DETAILS_CLASS: &str = "details";
/// Button toggling a card body.
pub const VIEW_PROFILE_CLASS: &str = "view-profile";
/// Toggle caption while the card is collapsed.
pub const VIEW_PROFILE_KEY: &str = "equipo.view_profile";
/// Toggle caption while the card is expanded.
pub const HIDE_PROFILE_KEY: &str = "equipo.hide_profile";

/// Dynamic label families refreshed after every render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DynamicLabel {
    /// `#timeline-label-5y`, whose arguments are rewritten by the timeline widget.
    TimelineLabel,
    /// `.view-profile` buttons of every `.member` card.
    ProfileToggles,
}

impl DynamicLabel {
    /// Every family, in refresh order.
    pub const ALL: [Self; 2] = [Self::TimelineLabel, Self::ProfileToggles];

    /// What: Re-render this family in `lang`.
    ///
    /// Inputs:
    /// - `doc`: Page
    /// - `store`: Translation store
    /// - `lang`: Render language
    ///
    /// Output:
    /// - Number of elements written
    pub fn refresh(self, doc: &mut dyn Document, store: &TranslationStore, lang: Language) -> usize {
        match self {
            Self::TimelineLabel => refresh_timeline_label(doc, store, lang),
            Self::ProfileToggles => refresh_profile_toggles(doc, store, lang),
        }
    }
}

/// What: Key for a profile toggle button.
///
/// Inputs:
/// - `expanded`: Whether the card's details are visible
///
/// Output:
/// - `equipo.hide_profile` when expanded, `equipo.view_profile` otherwise
#[must_use]
pub const fn profile_toggle_key(expanded: bool) -> &'static str {
    if expanded {
        HIDE_PROFILE_KEY
    } else {
        VIEW_PROFILE_KEY
    }
}

/// What: Refresh every dynamic label family.
///
/// Inputs:
/// - `doc`: Page
/// - `store`: Translation store
/// - `lang`: Render language
///
/// Output:
/// - Total number of elements written
pub fn refresh_dynamic_labels(
    doc: &mut dyn Document,
    store: &TranslationStore,
    lang: Language,
) -> usize {
    let mut written = 0;
    for label in DynamicLabel::ALL {
        written += label.refresh(doc, store, lang);
    }
    written
}

/// Re-render `#timeline-label-5y` from its own marker and arguments.
fn refresh_timeline_label(doc: &mut dyn Document, store: &TranslationStore, lang: Language) -> usize {
    let Some(label) = doc.element_by_id(TIMELINE_LABEL_ID) else {
        return 0;
    };
    let Some(key) = doc.attribute(label, I18N_ATTR).filter(|k| !k.trim().is_empty()) else {
        return 0;
    };
    let args = parse_args(doc.attribute(label, ARGS_ATTR).as_deref()).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "timeline label arguments unreadable");
        ReplacementSet::new()
    });
    doc.set_text_content(label, &translate(store, key.trim(), &args, lang));
    1
}

/// Caption every card toggle after its details' visibility.
fn refresh_profile_toggles(doc: &mut dyn Document, store: &TranslationStore, lang: Language) -> usize {
    let mut written = 0;
    for card in doc.elements_with_class(MEMBER_CLASS) {
        let (Some(details), Some(button)) = (
            doc.descendant_with_class(card, DETAILS_CLASS),
            doc.descendant_with_class(card, VIEW_PROFILE_CLASS),
        ) else {
            continue;
        };
        let key = profile_toggle_key(!doc.is_hidden(details));
        doc.set_text_content(button, &translate(store, key, &ReplacementSet::new(), lang));
        written += 1;
    }
    written
}
