//! Click wiring for the navbar controller

use super::controller::{collapse_menu, toggle_menu, MenuHandles, NavbarController};
use crate::dom::NavElement;
use crate::shared::errors::Result;
use crate::shared::logging::{self, LogOperation};

fn wire_toggle<E>(handles: &MenuHandles<E>, class: &str) -> Result<()>
where
    E: NavElement + Clone + 'static,
{
    let toggle = handles.toggle.clone();
    let menu = handles.menu.clone();
    let class = class.to_string();
    handles.toggle.on_click(Box::new(move || {
        if let Err(e) = toggle_menu(&toggle, &menu, &class) {
            logging::log_handler_error(LogOperation::Toggle, &e.to_string());
        }
    }))
}

/// Each link handler gets its own handles to the toggle and menu
fn wire_link<E>(link: &E, toggle: E, menu: E, class: String) -> Result<()>
where
    E: NavElement + 'static,
{
    link.on_click(Box::new(move || {
        if let Err(e) = collapse_menu(&toggle, &menu, &class) {
            logging::log_handler_error(LogOperation::LinkActivation, &e.to_string());
        }
    }))
}

/// Attach the toggle and link click handlers.
///
/// Nothing is attached when the toggle or menu was skipped during lookup.
pub fn wire_events<E>(controller: &NavbarController<E>) -> Result<()>
where
    E: NavElement + Clone + 'static,
{
    let Some(handles) = controller.handles() else {
        return Ok(());
    };
    let class = &controller.config().active_class;

    wire_toggle(handles, class)?;
    for link in controller.links() {
        wire_link(
            link,
            handles.toggle.clone(),
            handles.menu.clone(),
            class.clone(),
        )?;
    }
    Ok(())
}
