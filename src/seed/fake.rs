use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{Hash, Project, ProjectSummary, Repository};
use crate::seed::words;

/// Smallest length of any generated list.
pub const LIST_LEN_MIN: usize = 4;
/// Largest length of any generated list (inclusive).
pub const LIST_LEN_MAX: usize = 11;

fn list_len<R: Rng + ?Sized>(rng: &mut R) -> usize {
    rng.gen_range(LIST_LEN_MIN..=LIST_LEN_MAX)
}

pub fn fake_project_summary<R: Rng + ?Sized>(rng: &mut R) -> ProjectSummary {
    ProjectSummary {
        hash: Hash::random(rng),
        title: words::first_name(rng),
    }
}

/// Repositories are generated without markdown files.
pub fn fake_repository<R: Rng + ?Sized>(rng: &mut R) -> Repository {
    Repository {
        hash: Hash::random(rng),
        title: words::adjective(rng),
        description: words::paragraph(rng),
        markdowns: Vec::new(),
    }
}

pub fn fake_project<R: Rng + ?Sized>(rng: &mut R) -> Project {
    let repositories = fake_repositories(rng);
    Project {
        hash: Hash::random(rng),
        title: words::first_name(rng),
        description: words::paragraph(rng),
        parent: fake_project_summary(rng),
        repositories,
    }
}

pub fn fake_projects<R: Rng + ?Sized>(rng: &mut R) -> Vec<Project> {
    let len = list_len(rng);
    (0..len).map(|_| fake_project(rng)).collect()
}

pub fn fake_repositories<R: Rng + ?Sized>(rng: &mut R) -> Vec<Repository> {
    let len = list_len(rng);
    (0..len).map(|_| fake_repository(rng)).collect()
}

/// Process-wide source of generated entities.
///
/// Built once at startup and handed to the schema as context data. The random
/// source sits behind a mutex so concurrent resolvers take turns drawing from
/// it; it is never reseeded.
pub struct Faker {
    rng: Mutex<StdRng>,
}

impl Faker {
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Same seed, same sequence of entities.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn project(&self) -> Project {
        fake_project(&mut *self.rng.lock())
    }

    pub fn projects(&self) -> Vec<Project> {
        fake_projects(&mut *self.rng.lock())
    }

    pub fn repositories(&self) -> Vec<Repository> {
        fake_repositories(&mut *self.rng.lock())
    }
}

impl std::fmt::Debug for Faker {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Faker").finish_non_exhaustive()
    }
}
