// PagePulse - app/page_loader.rs
//
// Loads the page definition shown at startup: a user-supplied TOML file
// when one was given, otherwise the built-in showcase page. Load
// failures degrade to the built-in page (and, if that is somehow broken
// too, to an empty shell) so the window always opens.

use crate::core::content::{self, PageDefinition};
use crate::util::constants;
use crate::util::error::ContentError;
use std::path::Path;

/// Load the page to display. Returns the page plus any non-fatal errors
/// encountered on the way; callers surface those to the user.
pub fn load_page(user_page: Option<&Path>) -> (PageDefinition, Vec<ContentError>) {
    let mut errors = Vec::new();

    if let Some(path) = user_page {
        match load_user_page(path) {
            Ok(page) => {
                tracing::info!(
                    path = %path.display(),
                    title = %page.title,
                    "Loaded user page definition"
                );
                return (page, errors);
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "User page failed to load; falling back to built-in page"
                );
                errors.push(e);
            }
        }
    }

    match content::load_builtin_page() {
        Ok(page) => {
            tracing::debug!(title = %page.title, "Loaded built-in page");
            (page, errors)
        }
        Err(e) => {
            // The built-in page ships inside the binary; failing to
            // validate it is a build defect. Degrade to an empty shell
            // rather than refusing to start.
            tracing::error!(error = %e, "Built-in page failed to load");
            errors.push(e);
            (empty_page(), errors)
        }
    }
}

/// Load and validate a page definition from disk.
pub fn load_user_page(path: &Path) -> Result<PageDefinition, ContentError> {
    let owned = path.to_path_buf();

    let metadata = std::fs::metadata(path).map_err(|e| ContentError::Io {
        path: owned.clone(),
        source: e,
    })?;
    if metadata.len() > constants::MAX_PAGE_FILE_SIZE {
        return Err(ContentError::FileTooLarge {
            path: owned,
            size: metadata.len(),
            max_size: constants::MAX_PAGE_FILE_SIZE,
        });
    }

    let text = std::fs::read_to_string(path).map_err(|e| ContentError::Io {
        path: owned.clone(),
        source: e,
    })?;

    let doc = content::parse_page_toml(&text, &owned)?;
    content::validate_page(doc)
}

/// Minimal last-resort page: a bare title, no sections.
fn empty_page() -> PageDefinition {
    PageDefinition {
        title: constants::APP_NAME.to_string(),
        tagline: String::new(),
        menu: None,
        nav_links: Vec::new(),
        sections: Vec::new(),
        flashes: Vec::new(),
    }
}
