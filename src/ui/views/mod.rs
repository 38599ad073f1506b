pub mod admin_courses;
pub mod admin_dashboard;
pub mod admin_login;
pub mod admin_quizzes;
pub mod admin_reports;
pub mod course;
pub mod home;
pub mod lesson;
pub mod login;
pub mod quiz;
pub mod quiz_outcome;
pub mod quiz_unavailable;
pub mod register;
