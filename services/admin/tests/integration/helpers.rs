use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use capvote_admin::domain::repository::{FlavorRepository, StatsRepository, StepRepository};
use capvote_admin::domain::types::{FlavorStep, HumorFlavor};
use capvote_admin::error::AdminServiceError;

// ── MockFlavorRepo ───────────────────────────────────────────────────────────

pub struct MockFlavorRepo {
    pub flavors: Arc<Mutex<Vec<HumorFlavor>>>,
    pub steps: Arc<Mutex<Vec<FlavorStep>>>,
}

impl MockFlavorRepo {
    pub fn new(flavors: Vec<HumorFlavor>) -> Self {
        Self {
            flavors: Arc::new(Mutex::new(flavors)),
            steps: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Shares the given step list so cascade deletes can be observed.
    pub fn with_steps(flavors: Vec<HumorFlavor>, steps: Arc<Mutex<Vec<FlavorStep>>>) -> Self {
        Self {
            flavors: Arc::new(Mutex::new(flavors)),
            steps,
        }
    }

    pub fn flavors_handle(&self) -> Arc<Mutex<Vec<HumorFlavor>>> {
        Arc::clone(&self.flavors)
    }
}

impl FlavorRepository for MockFlavorRepo {
    async fn list(&self) -> Result<Vec<HumorFlavor>, AdminServiceError> {
        let mut flavors = self.flavors.lock().unwrap().clone();
        flavors.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(flavors)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<HumorFlavor>, AdminServiceError> {
        Ok(self
            .flavors
            .lock()
            .unwrap()
            .iter()
            .find(|f| f.id == id)
            .cloned())
    }

    async fn name_taken(
        &self,
        name: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, AdminServiceError> {
        Ok(self
            .flavors
            .lock()
            .unwrap()
            .iter()
            .any(|f| f.name == name && Some(f.id) != exclude))
    }

    async fn insert(&self, flavor: &HumorFlavor) -> Result<(), AdminServiceError> {
        self.flavors.lock().unwrap().push(flavor.clone());
        Ok(())
    }

    async fn update(
        &self,
        id: Uuid,
        name: &str,
        description: &str,
    ) -> Result<bool, AdminServiceError> {
        let mut flavors = self.flavors.lock().unwrap();
        match flavors.iter_mut().find(|f| f.id == id) {
            Some(flavor) => {
                flavor.name = name.to_owned();
                flavor.description = description.to_owned();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_with_steps(&self, id: Uuid) -> Result<bool, AdminServiceError> {
        let mut flavors = self.flavors.lock().unwrap();
        let before = flavors.len();
        flavors.retain(|f| f.id != id);
        if flavors.len() == before {
            return Ok(false);
        }
        self.steps.lock().unwrap().retain(|s| s.flavor_id != id);
        Ok(true)
    }
}

// ── MockStepRepo ─────────────────────────────────────────────────────────────

pub struct MockStepRepo {
    pub steps: Arc<Mutex<Vec<FlavorStep>>>,
}

impl MockStepRepo {
    pub fn new(steps: Vec<FlavorStep>) -> Self {
        Self {
            steps: Arc::new(Mutex::new(steps)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn steps_handle(&self) -> Arc<Mutex<Vec<FlavorStep>>> {
        Arc::clone(&self.steps)
    }
}

impl StepRepository for MockStepRepo {
    async fn list_by_flavor(
        &self,
        flavor_id: Uuid,
    ) -> Result<Vec<FlavorStep>, AdminServiceError> {
        let mut steps: Vec<_> = self
            .steps
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.flavor_id == flavor_id)
            .cloned()
            .collect();
        steps.sort_by_key(|s| s.step_number);
        Ok(steps)
    }

    async fn count_by_flavor(&self, flavor_id: Uuid) -> Result<u64, AdminServiceError> {
        Ok(self
            .steps
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.flavor_id == flavor_id)
            .count() as u64)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<FlavorStep>, AdminServiceError> {
        Ok(self
            .steps
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }

    async fn number_taken(
        &self,
        flavor_id: Uuid,
        step_number: i32,
        exclude: Option<Uuid>,
    ) -> Result<bool, AdminServiceError> {
        Ok(self.steps.lock().unwrap().iter().any(|s| {
            s.flavor_id == flavor_id && s.step_number == step_number && Some(s.id) != exclude
        }))
    }

    async fn insert(&self, step: &FlavorStep) -> Result<(), AdminServiceError> {
        self.steps.lock().unwrap().push(step.clone());
        Ok(())
    }

    async fn update(
        &self,
        id: Uuid,
        step_number: i32,
        instruction: &str,
    ) -> Result<bool, AdminServiceError> {
        let mut steps = self.steps.lock().unwrap();
        match steps.iter_mut().find(|s| s.id == id) {
            Some(step) => {
                step.step_number = step_number;
                step.instruction = instruction.to_owned();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AdminServiceError> {
        let mut steps = self.steps.lock().unwrap();
        let before = steps.len();
        steps.retain(|s| s.id != id);
        Ok(steps.len() < before)
    }
}

// ── MockStatsRepo ────────────────────────────────────────────────────────────

pub struct MockStatsRepo {
    pub profiles: u64,
    pub superadmins: u64,
    pub recent: u64,
    pub images: u64,
    pub captions: u64,
    pub votes: u64,
    pub seen_cutoff: Arc<Mutex<Option<DateTime<Utc>>>>,
}

impl MockStatsRepo {
    pub fn cutoff_handle(&self) -> Arc<Mutex<Option<DateTime<Utc>>>> {
        Arc::clone(&self.seen_cutoff)
    }
}

impl Default for MockStatsRepo {
    fn default() -> Self {
        Self {
            profiles: 0,
            superadmins: 0,
            recent: 0,
            images: 0,
            captions: 0,
            votes: 0,
            seen_cutoff: Arc::new(Mutex::new(None)),
        }
    }
}

impl StatsRepository for MockStatsRepo {
    async fn count_profiles(&self) -> Result<u64, AdminServiceError> {
        Ok(self.profiles)
    }

    async fn count_superadmins(&self) -> Result<u64, AdminServiceError> {
        Ok(self.superadmins)
    }

    async fn count_profiles_since(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<u64, AdminServiceError> {
        *self.seen_cutoff.lock().unwrap() = Some(cutoff);
        Ok(self.recent)
    }

    async fn count_images(&self) -> Result<u64, AdminServiceError> {
        Ok(self.images)
    }

    async fn count_captions(&self) -> Result<u64, AdminServiceError> {
        Ok(self.captions)
    }

    async fn count_votes(&self) -> Result<u64, AdminServiceError> {
        Ok(self.votes)
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub fn test_flavor(name: &str) -> HumorFlavor {
    HumorFlavor {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        description: format!("{name} humor"),
        created_at: Utc::now(),
    }
}

pub fn test_step(flavor_id: Uuid, step_number: i32) -> FlavorStep {
    FlavorStep {
        id: Uuid::new_v4(),
        flavor_id,
        step_number,
        instruction: format!("instruction {step_number}"),
        created_at: Utc::now(),
    }
}
