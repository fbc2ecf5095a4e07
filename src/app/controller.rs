//! Navigation bar controller
//!
//! Resolves the toggle, menu and links once, then reacts to two kinds of
//! activation: the toggle flips the menu open/closed, any link collapses it.
//! The current-page link is highlighted once at the end of initialization.

use super::wiring::wire_events;
use crate::dom::{NavDocument, NavElement};
use crate::domain::{is_current_target, page_identifier, MissingElementPolicy, NavbarConfig};
use crate::shared::errors::{NavbarError, Result};
use crate::shared::logging;

/// The two elements the toggle operates on
#[derive(Debug, Clone)]
pub struct MenuHandles<E> {
    pub toggle: E,
    pub menu: E,
}

#[derive(Debug, Clone)]
pub struct NavbarController<E> {
    handles: Option<MenuHandles<E>>,
    links: Vec<E>,
    config: NavbarConfig,
}

impl<E: NavElement + Clone> NavbarController<E> {
    /// Validate the config and look up the navbar elements without
    /// touching them.
    ///
    /// A missing toggle or menu is handled per `config.on_missing_element`.
    pub fn resolve<D>(document: &D, config: NavbarConfig) -> Result<Self>
    where
        D: NavDocument<Element = E>,
    {
        config.validate()?;
        logging::log_init_start(
            &config.toggle_selector,
            &config.menu_selector,
            &config.link_selector,
        );

        let toggle = document.query_one(&config.toggle_selector)?;
        let menu = document.query_one(&config.menu_selector)?;

        let handles = match (toggle, menu) {
            (Some(toggle), Some(menu)) => Some(MenuHandles { toggle, menu }),
            (toggle, _) => {
                let (role, selector) = if toggle.is_none() {
                    ("toggle", config.toggle_selector.as_str())
                } else {
                    ("menu", config.menu_selector.as_str())
                };
                match config.on_missing_element {
                    MissingElementPolicy::FailFast => {
                        logging::log_missing_element(role, selector, true);
                        return Err(NavbarError::missing(role, selector));
                    }
                    MissingElementPolicy::SkipToggle => {
                        logging::log_missing_element(role, selector, false);
                        None
                    }
                }
            }
        };

        let links = document.query_all(&config.link_selector)?;

        Ok(NavbarController {
            handles,
            links,
            config,
        })
    }

    /// Toggle activation: flip the marker on the toggle and on the menu
    pub fn activate_toggle(&self) -> Result<()> {
        if let Some(handles) = &self.handles {
            toggle_menu(&handles.toggle, &handles.menu, &self.config.active_class)?;
        }
        Ok(())
    }

    /// Link activation: collapse the menu
    pub fn activate_link(&self) -> Result<()> {
        if let Some(handles) = &self.handles {
            collapse_menu(&handles.toggle, &handles.menu, &self.config.active_class)?;
        }
        Ok(())
    }

    /// Mark every link whose raw target equals the page identifier of `path`.
    ///
    /// Returns how many links were marked.
    pub fn set_active_link(&self, path: &str) -> Result<usize> {
        let page = page_identifier(path, &self.config.default_page);
        let matched = mark_active_links(
            &self.links,
            &page,
            &self.config.target_attribute,
            &self.config.active_class,
        )?;

        logging::log_active_link_result(&page, self.links.len(), matched);
        if matched > 1 {
            logging::log_multiple_active_links(&page, matched);
        }
        Ok(matched)
    }

    /// Whether the menu currently carries the active marker
    pub fn is_expanded(&self) -> bool {
        self.handles
            .as_ref()
            .is_some_and(|h| h.menu.has_class(&self.config.active_class))
    }

    pub fn handles(&self) -> Option<&MenuHandles<E>> {
        self.handles.as_ref()
    }

    pub fn links(&self) -> &[E] {
        &self.links
    }

    pub fn config(&self) -> &NavbarConfig {
        &self.config
    }
}

/// Flip `class` on both elements independently
pub fn toggle_menu<E: NavElement>(toggle: &E, menu: &E, class: &str) -> Result<()> {
    toggle.toggle_class(class)?;
    let expanded = menu.toggle_class(class)?;
    logging::log_toggle(expanded);
    Ok(())
}

/// Remove `class` from both elements; a no-op when already absent
pub fn collapse_menu<E: NavElement>(toggle: &E, menu: &E, class: &str) -> Result<()> {
    toggle.remove_class(class)?;
    menu.remove_class(class)?;
    logging::log_link_activation();
    Ok(())
}

/// Add `class` to each link whose `attribute` equals `page` literally.
/// Non-matching links are never touched.
pub fn mark_active_links<E: NavElement>(
    links: &[E],
    page: &str,
    attribute: &str,
    class: &str,
) -> Result<usize> {
    let mut matched = 0;
    for link in links {
        let Some(target) = link.attribute(attribute) else {
            continue;
        };
        if is_current_target(&target, page) {
            link.add_class(class)?;
            matched += 1;
        }
    }
    Ok(matched)
}

/// Resolve the navbar, attach the click handlers, then run the
/// active-link pass for the document's current path.
pub fn initialize<D>(document: &D, config: NavbarConfig) -> Result<NavbarController<D::Element>>
where
    D: NavDocument,
    D::Element: 'static,
{
    let controller = NavbarController::resolve(document, config)?;
    wire_events(&controller)?;
    let path = document.current_path()?;
    controller.set_active_link(&path)?;
    logging::log_init_complete(controller.links.len(), controller.handles.is_some());
    Ok(controller)
}
