use std::collections::HashSet;
use uuid::Uuid;

/// Identifiers produced so far, in insertion order.
///
/// Child seeders walk these vectors, so module `i` always belongs to course `i`
/// and the `i`-th instructor is paired with the `i`-th course.
#[derive(Debug, Default)]
pub struct SeedContext {
    pub course_ids: Vec<Uuid>,
    pub module_ids: Vec<Uuid>,
    pub lesson_ids: Vec<Uuid>,
    pub instructor_ids: Vec<Uuid>,
    pub pair_count: usize,
    issued: HashSet<Uuid>,
}

impl SeedContext {
    /// A random v4 id never handed out before in this run.
    pub fn fresh_id(&mut self) -> Uuid {
        loop {
            let id = Uuid::new_v4();
            if self.issued.insert(id) {
                return id;
            }
        }
    }

    pub fn issued(&self) -> usize {
        self.issued.len()
    }
}

/// What a committed run inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub course_ids: Vec<Uuid>,
    pub module_ids: Vec<Uuid>,
    pub lesson_ids: Vec<Uuid>,
    pub instructor_ids: Vec<Uuid>,
    pub pair_count: usize,
}

impl SeedReport {
    pub fn total_rows(&self) -> usize {
        self.course_ids.len()
            + self.module_ids.len()
            + self.lesson_ids.len()
            + self.instructor_ids.len()
            + self.pair_count
    }
}

impl From<SeedContext> for SeedReport {
    fn from(ctx: SeedContext) -> Self {
        Self {
            course_ids: ctx.course_ids,
            module_ids: ctx.module_ids,
            lesson_ids: ctx.lesson_ids,
            instructor_ids: ctx.instructor_ids,
            pair_count: ctx.pair_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ids_are_unique_and_tracked() {
        let mut ctx = SeedContext::default();
        let ids: HashSet<Uuid> = (0..500).map(|_| ctx.fresh_id()).collect();

        assert_eq!(ids.len(), 500);
        assert_eq!(ctx.issued(), 500);
        assert!(ids.iter().all(|id| id.get_version_num() == 4));
    }

    #[test]
    fn report_counts_every_row() {
        let mut ctx = SeedContext::default();
        let course_id = ctx.fresh_id();
        let instructor_id = ctx.fresh_id();
        ctx.course_ids.push(course_id);
        ctx.instructor_ids.push(instructor_id);
        ctx.pair_count = 1;

        let report = SeedReport::from(ctx);
        assert_eq!(report.total_rows(), 3);
    }
}
