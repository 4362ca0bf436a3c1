use async_trait::async_trait;
use tokio::sync::Mutex;

use handlerlab_core::course::{self, Course, NewCourse};
use handlerlab_core::error::Result;

/// Course storage as seen by the HTTP handlers.
#[async_trait]
pub trait CourseStore: Send + Sync {
    /// Snapshot of all courses in insertion order.
    async fn list(&self) -> Vec<Course>;

    /// Validate, assign the next id, and append.
    async fn create(&self, new: NewCourse) -> Result<Course>;
}

/// Process-memory course list.
///
/// The lock is held across read-max, id assignment, and append, so
/// concurrent creates never share an id or lose a record.
#[derive(Default)]
pub struct InMemoryCourseStore {
    courses: Mutex<Vec<Course>>,
}

impl InMemoryCourseStore {
    pub fn new(seed: Vec<Course>) -> Self {
        Self {
            courses: Mutex::new(seed),
        }
    }

    /// Build from a JSON seed document.
    pub fn from_seed_str(seed: &str) -> Result<Self> {
        Ok(Self::new(course::parse_seed(seed)?))
    }
}

#[async_trait]
impl CourseStore for InMemoryCourseStore {
    async fn list(&self) -> Vec<Course> {
        self.courses.lock().await.clone()
    }

    async fn create(&self, new: NewCourse) -> Result<Course> {
        new.validate()?;

        let mut courses = self.courses.lock().await;
        let id = course::next_id(&courses)?;
        let created = new.into_course(id);
        courses.push(created.clone());
        Ok(created)
    }
}
