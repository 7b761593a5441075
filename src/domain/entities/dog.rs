//! Dog entity, the single resource managed by the service.

/// A dog stored in the registry.
///
/// `id` is assigned by the store on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Dog {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub breed: String,
    pub description: String,
}

impl Dog {
    /// Creates a new Dog instance.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let dog = Dog::new(1, "Rex".into(), 3, "Labrador".into(), "friendly".into());
    /// ```
    pub fn new(id: i32, name: String, age: i32, breed: String, description: String) -> Self {
        Self {
            id,
            name,
            age,
            breed,
            description,
        }
    }

    /// Merges a patch over this record.
    ///
    /// Fields left `None` in the patch keep their current value. `id` is never touched.
    pub fn apply(mut self, patch: DogPatch) -> Self {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
        if let Some(breed) = patch.breed {
            self.breed = breed;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        self
    }
}

/// Input data for creating a new dog.
///
/// `breed` is `None` when the request did not carry a textual breed. Manual
/// validation does not inspect `breed`, so such a value reaches the store and
/// is rejected there by the `NOT NULL` column.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDog {
    pub name: String,
    pub age: i32,
    pub breed: Option<String>,
    pub description: String,
}

/// Partial update for an existing dog.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DogPatch {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub breed: Option<String>,
    pub description: Option<String>,
}

impl DogPatch {
    /// Returns true if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.age.is_none()
            && self.breed.is_none()
            && self.description.is_none()
    }
}
