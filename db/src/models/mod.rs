pub mod course;
pub mod course_instructor;
pub mod instructor;
pub mod lesson;
pub mod module;

pub use course::Entity as Course;
pub use course_instructor::Entity as CourseInstructor;
pub use instructor::Entity as Instructor;
pub use lesson::Entity as Lesson;
pub use module::Entity as Module;
