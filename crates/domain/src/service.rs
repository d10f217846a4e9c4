use log::{debug, error};

use crate::{
    CompiledTemplate, GuidedTemplate, PersonalizeError, ProfileRegistry, ProgramDesignAnswers,
    ReadError, Recommendation, Resolver, Snapshot, SnapshotRepository, StorageError, catalog,
    guided, recommend,
};

/// Engine operations on the snapshot of a repository.
pub struct Service<R> {
    repository: R,
    snapshot: Snapshot,
    registry: ProfileRegistry,
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(StorageError::NotFound(_)) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: SnapshotRepository> Service<R> {
    pub fn new(repository: R) -> Result<Self, ReadError> {
        let snapshot = log_on_error!(repository.read_snapshot(), ReadError, "read", "snapshot")?;
        let registry = ProfileRegistry::new(snapshot.exercise_profiles.clone());
        debug!(
            "loaded {} templates and {} exercise profiles",
            snapshot.template_blueprints.len(),
            registry.len()
        );
        Ok(Self {
            repository,
            snapshot,
            registry,
        })
    }

    /// Replaces the snapshot by the current state of the repository. The previous snapshot is
    /// kept if reading fails.
    pub fn reload(&mut self) -> Result<(), ReadError> {
        let snapshot = log_on_error!(
            self.repository.read_snapshot(),
            ReadError,
            "reload",
            "snapshot"
        )?;
        self.registry = ProfileRegistry::new(snapshot.exercise_profiles.clone());
        self.snapshot = snapshot;
        Ok(())
    }

    #[must_use]
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    #[must_use]
    pub fn registry(&self) -> &ProfileRegistry {
        &self.registry
    }

    #[must_use]
    pub fn catalog(&self) -> Vec<CompiledTemplate> {
        catalog::compile_catalog(&self.snapshot, &self.registry)
    }

    #[must_use]
    pub fn rank(&self, answers: &ProgramDesignAnswers) -> Vec<Recommendation<'_>> {
        crate::rank(
            &self.snapshot.template_blueprints,
            answers,
            &Resolver::new(&self.registry),
        )
    }

    #[must_use]
    pub fn recommend(&self, answers: &ProgramDesignAnswers) -> Option<Recommendation<'_>> {
        recommend(
            &self.snapshot.template_blueprints,
            answers,
            &Resolver::new(&self.registry),
        )
    }

    /// Builds a guided template from the best matching blueprint.
    pub fn personalize(
        &self,
        answers: &ProgramDesignAnswers,
    ) -> Result<GuidedTemplate, PersonalizeError> {
        let recommendation = self
            .recommend(answers)
            .ok_or(PersonalizeError::NoTemplates)?;
        Ok(guided::build(
            recommendation.template,
            answers,
            &Resolver::new(&self.registry),
        ))
    }

    pub fn build(
        &self,
        template_id: &str,
        answers: &ProgramDesignAnswers,
    ) -> Result<GuidedTemplate, PersonalizeError> {
        let template = self
            .snapshot
            .blueprint(template_id)
            .ok_or_else(|| PersonalizeError::UnknownTemplate(template_id.to_string()))?;
        Ok(guided::build(
            template,
            answers,
            &Resolver::new(&self.registry),
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use crate::{DaysPerWeek, EquipmentProfile, Focus};

    use super::*;

    struct FakeRepository {
        snapshots: RefCell<Vec<Result<Snapshot, StorageError>>>,
    }

    impl FakeRepository {
        fn new(snapshots: Vec<Result<Snapshot, StorageError>>) -> Self {
            Self {
                snapshots: RefCell::new(snapshots),
            }
        }
    }

    impl SnapshotRepository for FakeRepository {
        fn read_snapshot(&self) -> Result<Snapshot, ReadError> {
            Ok(self.snapshots.borrow_mut().remove(0)?)
        }
    }

    fn answers(days: u8, focus: Focus) -> ProgramDesignAnswers {
        ProgramDesignAnswers {
            days_per_week: DaysPerWeek::new(days).unwrap(),
            focus,
            ..ProgramDesignAnswers::default()
        }
    }

    fn service() -> Service<FakeRepository> {
        Service::new(FakeRepository::new(vec![Ok(
            catalog::default_snapshot().clone()
        )]))
        .unwrap()
    }

    #[test]
    fn test_new_error() {
        assert!(matches!(
            Service::new(FakeRepository::new(vec![Err(StorageError::NotFound(
                "snapshot.json".to_string()
            ))])),
            Err(ReadError::Storage(StorageError::NotFound(_)))
        ));
    }

    #[test]
    fn test_reload() {
        let mut service = Service::new(FakeRepository::new(vec![
            Ok(catalog::default_snapshot().clone()),
            Err(StorageError::Invalid("no templates".to_string())),
            Ok(Snapshot::default()),
        ]))
        .unwrap();
        assert_eq!(service.registry().len(), 27);

        assert!(service.reload().is_err());
        assert_eq!(service.snapshot(), catalog::default_snapshot());

        assert!(service.reload().is_ok());
        assert!(service.registry().is_empty());
        assert!(service.catalog().is_empty());
    }

    #[test]
    fn test_catalog() {
        let service = service();
        assert_eq!(
            service.catalog().len(),
            catalog::default_snapshot().template_blueprints.len()
        );
    }

    #[test]
    fn test_rank() {
        let service = service();
        let ranking = service.rank(&answers(4, Focus::None));
        assert_eq!(
            ranking.iter().map(|r| r.index).collect::<Vec<_>>(),
            (0..catalog::default_snapshot().template_blueprints.len()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_recommend() {
        let service = service();
        assert_eq!(
            service
                .recommend(&answers(4, Focus::Upper))
                .map(|r| r.template.id.as_str()),
            Some("upper_lower_4_upper_focus")
        );
    }

    #[test]
    fn test_personalize() {
        let service = service();
        let answers = ProgramDesignAnswers {
            equipment: EquipmentProfile::DumbbellOnly,
            ..answers(3, Focus::None)
        };
        let guided = service.personalize(&answers).unwrap();
        assert_eq!(guided.source_id, "full_body_3");
        assert_eq!(guided.name, "Full Body 3-Day (Guided)");
        assert_eq!(guided.days.len(), 3);
        assert_eq!(guided.answers, answers);
    }

    #[test]
    fn test_personalize_without_templates() {
        let service = Service::new(FakeRepository::new(vec![Ok(Snapshot::default())])).unwrap();
        assert_eq!(
            service.personalize(&ProgramDesignAnswers::default()),
            Err(PersonalizeError::NoTemplates)
        );
    }

    #[test]
    fn test_build() {
        let service = service();
        let guided = service
            .build("push_pull_legs_6", &answers(3, Focus::None))
            .unwrap();
        assert_eq!(guided.source_id, "push_pull_legs_6");
        assert_eq!(guided.days.len(), 6);
        assert_eq!(
            service.build("bro_split_5", &ProgramDesignAnswers::default()),
            Err(PersonalizeError::UnknownTemplate("bro_split_5".to_string()))
        );
    }
}
