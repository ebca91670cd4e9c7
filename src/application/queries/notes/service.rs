use std::sync::Arc;

use crate::domain::notes::NoteRepository;

pub struct NoteQueryService {
    pub(super) repo: Arc<dyn NoteRepository>,
}

impl NoteQueryService {
    pub fn new(repo: Arc<dyn NoteRepository>) -> Self {
        Self { repo }
    }
}
