//! In-app notification inbox

use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use super::Slice;
use crate::error::AppResult;
use crate::store::action::{Action, IdPayload};
use shared::models::Notification;

pub const ADD: &str = "notifications/add";
pub const MARK_READ: &str = "notifications/markRead";
pub const MARK_ALL_READ: &str = "notifications/markAllRead";
pub const REMOVE: &str = "notifications/remove";
pub const CLEAR: &str = "notifications/clear";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NotificationsState {
    /// Newest first
    pub items: Vec<Notification>,
    /// Always equal to the number of unread items
    pub unread_count: usize,
}

impl NotificationsState {
    fn recount(&mut self) {
        self.unread_count = self.items.iter().filter(|n| !n.read).count();
    }
}

pub struct NotificationsSlice;

impl Slice for NotificationsSlice {
    const NAME: &'static str = "notifications";
    type State = NotificationsState;

    fn reduce(state: &mut NotificationsState, action: &Action) -> AppResult<()> {
        match action.kind.as_str() {
            ADD => {
                let notification: Notification = action.payload_as()?;
                state.items.retain(|n| n.id != notification.id);
                state.items.insert(0, notification);
            }
            MARK_READ => {
                let IdPayload { id } = action.payload_as()?;
                if let Some(n) = state.items.iter_mut().find(|n| n.id == id) {
                    n.read = true;
                }
            }
            MARK_ALL_READ => state.items.iter_mut().for_each(|n| n.read = true),
            REMOVE => {
                let IdPayload { id } = action.payload_as()?;
                state.items.retain(|n| n.id != id);
            }
            CLEAR => state.items.clear(),
            _ => return Ok(()),
        }
        state.recount();
        Ok(())
    }
}

pub fn add(notification: &Notification) -> Action {
    Action::json(ADD, json!(notification))
}

pub fn mark_read(id: Uuid) -> Action {
    Action::json(MARK_READ, json!({ "id": id }))
}

pub fn mark_all_read() -> Action {
    Action::new(MARK_ALL_READ)
}

pub fn remove(id: Uuid) -> Action {
    Action::json(REMOVE, json!({ "id": id }))
}

pub fn clear() -> Action {
    Action::new(CLEAR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use shared::models::NotificationKind;

    fn notification(title: &str) -> Notification {
        Notification::new(NotificationKind::PestAlert, title, "Check your fields")
    }

    #[test]
    fn test_inbox_flow() {
        let mut state = NotificationsState::default();
        let first = notification("Fall Armyworm nearby");
        let second = notification("Late Blight risk");
        NotificationsSlice::reduce(&mut state, &add(&first)).unwrap();
        NotificationsSlice::reduce(&mut state, &add(&second)).unwrap();
        assert_eq!(state.unread_count, 2);
        assert_eq!(state.items[0].id, second.id);

        NotificationsSlice::reduce(&mut state, &mark_read(first.id)).unwrap();
        assert_eq!(state.unread_count, 1);

        NotificationsSlice::reduce(&mut state, &remove(second.id)).unwrap();
        assert_eq!(state.unread_count, 0);
        assert_eq!(state.items.len(), 1);

        NotificationsSlice::reduce(&mut state, &clear()).unwrap();
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_readding_same_notification_does_not_duplicate() {
        let mut state = NotificationsState::default();
        let n = notification("Frost tonight");
        NotificationsSlice::reduce(&mut state, &add(&n)).unwrap();
        NotificationsSlice::reduce(&mut state, &add(&n)).unwrap();
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.unread_count, 1);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add,
        MarkRead(usize),
        MarkAllRead,
        Remove(usize),
        Clear,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => Just(Op::Add),
            2 => (0usize..8).prop_map(Op::MarkRead),
            1 => Just(Op::MarkAllRead),
            2 => (0usize..8).prop_map(Op::Remove),
            1 => Just(Op::Clear),
        ]
    }

    proptest! {
        #[test]
        fn unread_count_matches_items(ops in prop::collection::vec(op(), 0..40)) {
            let mut state = NotificationsState::default();
            for op in ops {
                let pick = |i: usize| state.items.get(i).map(|n| n.id).unwrap_or_else(Uuid::new_v4);
                let action = match op {
                    Op::Add => add(&notification("alert")),
                    Op::MarkRead(i) => mark_read(pick(i)),
                    Op::MarkAllRead => mark_all_read(),
                    Op::Remove(i) => remove(pick(i)),
                    Op::Clear => clear(),
                };
                NotificationsSlice::reduce(&mut state, &action).unwrap();
                prop_assert_eq!(
                    state.unread_count,
                    state.items.iter().filter(|n| !n.read).count()
                );
            }
        }
    }
}
