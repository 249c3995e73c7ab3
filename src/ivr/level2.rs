use super::menu::{self, Language, Level2Outcome};
use super::{xml_dir, MenuParams, Xml};
use crate::error::AppError;
use crate::secrets::Secrets;
use crate::templates;
use axum::extract::Query;
use axum::Extension;

/// Level 2: the action menu for the selected language.
pub async fn prompt_handler(
    secrets: Extension<Secrets>,
    Query(params): Query<MenuParams>,
) -> Result<Xml, AppError> {
    let lang = Language::from_param(params.lang.as_deref());
    let xml = templates::render(
        xml_dir(),
        lang.menu_template(),
        &[("BASE_URL", &secrets.base_url)],
    )?;

    Ok(Xml(xml))
}

/// Processes the level 2 keypress: play the audio clip, dial the live
/// associate, or repeat the menu for the same language.
pub async fn action_handler(
    secrets: Extension<Secrets>,
    Query(params): Query<MenuParams>,
) -> Result<Xml, AppError> {
    let lang = Language::from_param(params.lang.as_deref());
    let outcome = menu::route_level2(&params.digits, lang);
    log::debug!(
        "Level 2 digits {:?} ({:?}) routed to {:?}",
        params.digits,
        lang,
        outcome
    );

    let xml = match outcome {
        Level2Outcome::PlayAudio(_) => templates::render(
            xml_dir(),
            outcome.template(),
            &[("AUDIO_URL", &secrets.audio_url)],
        )?,
        Level2Outcome::Connect(_) => templates::render(
            xml_dir(),
            outcome.template(),
            &[
                ("PLIVO_PHONE_NUMBER", &secrets.plivo_phone_number),
                ("FORWARD_TO_NUMBER", &secrets.forward_to_number),
            ],
        )?,
        Level2Outcome::Repeat(_) => templates::render(
            xml_dir(),
            outcome.template(),
            &[("BASE_URL", &secrets.base_url)],
        )?,
    };

    Ok(Xml(xml))
}
