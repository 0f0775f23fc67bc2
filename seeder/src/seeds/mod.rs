pub mod course;
pub mod course_instructor;
pub mod instructor;
pub mod lesson;
pub mod module;

pub const COURSE_COUNT: usize = 10;
pub const MODULES_PER_COURSE: usize = 1;
pub const LESSONS_PER_MODULE: usize = 1;
pub const INSTRUCTOR_COUNT: usize = 10;

pub const COURSE_DESCRIPTION_MAX_CHARS: usize = 100;
pub const LESSON_CONTENT_MAX_CHARS: usize = 200;
