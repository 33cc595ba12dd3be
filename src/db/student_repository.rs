use crate::db::models::{NewStudent, Student};
use crate::errors::Error;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

/// Repository for managing student records in the SQLite database
///
/// Every method issues exactly one parameterized statement.
pub struct StudentRepository<'a> {
    /// Database connection
    pub conn: &'a mut SqliteConnection,
}

impl<'a> StudentRepository<'a> {
    /// Creates a new StudentRepository instance
    ///
    /// # Arguments
    ///
    /// * `conn` - Mutable reference to SQLite database connection
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        StudentRepository { conn }
    }

    /// Retrieves every student, in whatever order storage returns them
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn list_students(&mut self) -> Result<Vec<Student>, Error> {
        use crate::schema::students::dsl::*;

        let found = students.select(Student::as_select()).load(self.conn)?;
        Ok(found)
    }

    /// Retrieves a single student by primary key
    ///
    /// # Arguments
    ///
    /// * `student_id` - The primary key to look up
    ///
    /// # Returns
    ///
    /// The student if a row matched, `None` otherwise
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn get_student(&mut self, student_id: i32) -> Result<Option<Student>, Error> {
        use crate::schema::students::dsl::*;

        let found = students
            .filter(id.eq(student_id))
            .select(Student::as_select())
            .first(self.conn)
            .optional()?;
        Ok(found)
    }

    /// Inserts a new student and returns the id generated by storage
    ///
    /// # Arguments
    ///
    /// * `new_student` - Already validated and sanitized values
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn insert_student(&mut self, new_student: &NewStudent) -> Result<i32, Error> {
        use crate::schema::students;

        let generated = diesel::insert_into(students::table)
            .values(new_student)
            .returning(students::id)
            .get_result::<i32>(self.conn)?;
        Ok(generated)
    }

    /// Replaces the email of the student matching `student_id`
    ///
    /// # Returns
    ///
    /// Number of rows touched, zero when no student matched
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn update_student_email(
        &mut self,
        student_id: i32,
        new_email: &str,
    ) -> Result<usize, Error> {
        use crate::schema::students::dsl::*;

        let touched = diesel::update(students.filter(id.eq(student_id)))
            .set(email.eq(new_email))
            .execute(self.conn)?;
        Ok(touched)
    }

    /// Deletes the student matching `student_id`
    ///
    /// # Returns
    ///
    /// Number of rows removed, zero when no student matched
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn delete_student(&mut self, student_id: i32) -> Result<usize, Error> {
        use crate::schema::students::dsl::*;

        let removed = diesel::delete(students.filter(id.eq(student_id))).execute(self.conn)?;
        Ok(removed)
    }
}
