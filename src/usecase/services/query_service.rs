use std::sync::Arc;

use crate::domain::entities::standard::{CoverageFact, Standard, StandardId, Teacher, TeacherId};
use crate::usecase::ports::catalog::{CoverageCatalog, StandardFilter};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub grade_levels: Vec<String>,
    pub subjects: Vec<String>,
    pub categories: Vec<String>,
}

#[derive(Clone)]
pub struct QueryService {
    catalog: Arc<dyn CoverageCatalog>,
}

impl QueryService {
    pub fn new(catalog: Arc<dyn CoverageCatalog>) -> Self {
        Self { catalog }
    }

    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            grade_levels: self.catalog.grade_levels(),
            subjects: self.catalog.subjects(),
            categories: self.catalog.categories(),
        }
    }

    pub fn filter_standards(&self, filter: &StandardFilter) -> Vec<Standard> {
        self.catalog.filter_standards(filter)
    }

    pub fn teachers(&self) -> Vec<Teacher> {
        self.catalog.teachers().to_vec()
    }

    pub fn coverage(&self, standard_id: &StandardId, teacher_id: &TeacherId) -> Option<CoverageFact> {
        self.catalog.coverage(standard_id, teacher_id).cloned()
    }

    pub fn teacher(&self, id: &TeacherId) -> Option<Teacher> {
        self.catalog.teacher_by_id(id).cloned()
    }

    pub fn standard(&self, id: &StandardId) -> Option<Standard> {
        self.catalog.standard_by_id(id).cloned()
    }
}

impl PartialEq for QueryService {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.catalog, &other.catalog)
    }
}
