use std::ops::Deref;
use std::rc::Rc;
use techvision_common::{RegistrationAction, RegistrationController};
use yew::Reducible;

/// Registration dialog state as seen by `use_reducer`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RegistrationStore(RegistrationController);

impl Reducible for RegistrationStore {
    type Action = RegistrationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut controller = self.0.clone();
        controller.apply(action);
        Rc::new(Self(controller))
    }
}

impl Deref for RegistrationStore {
    type Target = RegistrationController;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use techvision_common::{ModalState, RegistrationField};

    fn reduce_all(actions: Vec<RegistrationAction>) -> Rc<RegistrationStore> {
        actions
            .into_iter()
            .fold(Rc::new(RegistrationStore::default()), |store, action| {
                store.reduce(action)
            })
    }

    #[test]
    fn test_reducer_follows_controller() {
        let store = reduce_all(vec![
            RegistrationAction::Open,
            RegistrationAction::Update(RegistrationField::Name, "Jane Doe".into()),
            RegistrationAction::Submit,
        ]);
        assert_eq!(store.state(), ModalState::OpenWithError);
        assert_eq!(store.form().name, "Jane Doe");
    }

    #[test]
    fn test_reducer_does_not_mutate_previous_state() {
        let opened = reduce_all(vec![RegistrationAction::Open]);
        let submitted = opened.clone().reduce(RegistrationAction::Submit);
        assert_eq!(opened.state(), ModalState::OpenClean);
        assert_eq!(submitted.state(), ModalState::OpenWithError);
    }
}
