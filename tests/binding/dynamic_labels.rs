//! State-dependent labels re-derived after each render pass.

use afa_i18n::binding::BindingRegistry;
use afa_i18n::binding::ContentMode;
use afa_i18n::document::{Document, MemoryDocument};
use afa_i18n::i18n::{I18nContext, Language, ReplacementSet, TranslationStore};
use afa_i18n::storage::MemoryStorage;

const PAGE: &str = include_str!("../fixtures/index.html");

fn setup() -> (I18nContext<'static>, MemoryDocument, BindingRegistry) {
    let ctx = I18nContext::new(TranslationStore::embedded(), Box::new(MemoryStorage::new()));
    (ctx, MemoryDocument::parse_html(PAGE), BindingRegistry::new())
}

#[test]
/// What: An expanded team card reads "hide" in the new language after a switch.
fn expanded_card_toggle_follows_language() {
    let (mut ctx, mut doc, mut registry) = setup();
    ctx.init_language(&mut doc, &mut registry, None);

    let cards = doc.elements_with_class("member");
    let button = |doc: &MemoryDocument, card| {
        doc.descendant_with_class(card, "view-profile")
            .expect("card button")
    };
    let (collapsed, expanded) = (button(&doc, cards[0]), button(&doc, cards[1]));
    assert_eq!(doc.text_content(collapsed), "Ver perfil");
    assert_eq!(doc.text_content(expanded), "Ocultar perfil");

    ctx.set_language("en", &mut doc, &mut registry);
    assert_eq!(doc.text_content(collapsed), "View profile");
    assert_eq!(doc.text_content(expanded), "Hide profile");

    // collaborator collapses the second card, next pass follows the state
    let details = doc
        .descendant_with_class(cards[1], "details")
        .expect("card details");
    doc.set_attribute(details, "hidden", "");
    ctx.set_language("fr", &mut doc, &mut registry);
    assert_eq!(doc.text_content(expanded), "Voir le profil");
}

#[test]
/// What: The timeline caption uses the arguments the widget last wrote.
fn timeline_label_tracks_widget_arguments() {
    let (mut ctx, mut doc, mut registry) = setup();
    ctx.init_language(&mut doc, &mut registry, Some("en"));
    let label = doc.element_by_id("timeline-label-5y").expect("timeline label");
    assert_eq!(doc.text_content(label), "Year 2: 72 players");

    ctx.update_dynamic_message(
        &mut doc,
        label,
        "programas.plan.label",
        &ReplacementSet::new().with("year", 5).with("players", 144),
        ContentMode::Text,
    );
    assert_eq!(doc.text_content(label), "Year 5: 144 players");
    ctx.set_language("es", &mut doc, &mut registry);
    assert_eq!(doc.text_content(label), "Año 5: 144 jugadores");
}
