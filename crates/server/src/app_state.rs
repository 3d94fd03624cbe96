use std::{path::PathBuf, sync::Arc};

use crate::catalog::FilmCatalog;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) catalog: Arc<dyn FilmCatalog>,
    pub(crate) static_dir: Option<PathBuf>,
}
