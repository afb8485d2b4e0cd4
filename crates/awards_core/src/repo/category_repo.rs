//! Category collection contract and in-memory implementation.

use crate::model::category::AwardCategory;
use crate::repo::{RepoError, RepoResult};

/// Storage interface for award categories.
pub trait CategoryRepository {
    /// Appends one category.
    ///
    /// # Errors
    /// - `DuplicateId` when a category with the same id exists.
    fn insert_category(&mut self, category: AwardCategory) -> RepoResult<()>;
    fn get_category(&self, id: &str) -> Option<&AwardCategory>;
    fn get_category_mut(&mut self, id: &str) -> Option<&mut AwardCategory>;
    /// Hard-removes one category and returns it.
    fn remove_category(&mut self, id: &str) -> RepoResult<AwardCategory>;
    /// All categories in insertion order.
    fn list_categories(&self) -> &[AwardCategory];

    fn contains_category(&self, id: &str) -> bool {
        self.get_category(id).is_some()
    }
}

/// Vec-backed category collection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCategoryRepository {
    categories: Vec<AwardCategory>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CategoryRepository for InMemoryCategoryRepository {
    fn insert_category(&mut self, category: AwardCategory) -> RepoResult<()> {
        if self.contains_category(&category.id) {
            return Err(RepoError::DuplicateId(category.id));
        }
        self.categories.push(category);
        Ok(())
    }

    fn get_category(&self, id: &str) -> Option<&AwardCategory> {
        self.categories.iter().find(|category| category.id == id)
    }

    fn get_category_mut(&mut self, id: &str) -> Option<&mut AwardCategory> {
        self.categories.iter_mut().find(|category| category.id == id)
    }

    fn remove_category(&mut self, id: &str) -> RepoResult<AwardCategory> {
        let index = self
            .categories
            .iter()
            .position(|category| category.id == id)
            .ok_or_else(|| RepoError::NotFound(id.to_string()))?;
        Ok(self.categories.remove(index))
    }

    fn list_categories(&self) -> &[AwardCategory] {
        &self.categories
    }
}
