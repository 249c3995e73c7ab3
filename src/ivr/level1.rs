use super::{menu, xml_dir, MenuParams, Xml};
use crate::error::AppError;
use crate::secrets::Secrets;
use crate::templates;
use axum::extract::Query;
use axum::Extension;

/// Level 1: the language-selection menu.
pub async fn prompt_handler(secrets: Extension<Secrets>) -> Result<Xml, AppError> {
    let xml = templates::render(xml_dir(), "level1.xml", &[("BASE_URL", &secrets.base_url)])?;

    Ok(Xml(xml))
}

/// Processes the level 1 keypress: advance to the level 2 menu for the
/// selected language, or repeat level 1 on an unrecognized digit.
pub async fn action_handler(
    secrets: Extension<Secrets>,
    Query(params): Query<MenuParams>,
) -> Result<Xml, AppError> {
    let outcome = menu::route_level1(&params.digits);
    log::debug!("Level 1 digits {:?} routed to {:?}", params.digits, outcome);

    let xml = templates::render(
        xml_dir(),
        outcome.template(),
        &[("BASE_URL", &secrets.base_url)],
    )?;

    Ok(Xml(xml))
}
