use fleuron_shared::{OrderStatus, Role};

use OrderStatus::*;

/// Permitted (from, to) transition pairs per role. Membership is literal;
/// there are no transitive or implied permissions.
const DIRECTOR: &[(OrderStatus, OrderStatus)] = &[
    (Submitted, InPreparation),
    (InPreparation, PaymentReceived),
    (PaymentReceived, Announced),
    (Announced, OutForDelivery),
    (OutForDelivery, Delivered),
];

const RECEPTIONIST: &[(OrderStatus, OrderStatus)] = &[(PaymentReceived, Announced)];

const DESIGNER: &[(OrderStatus, OrderStatus)] = &[(Submitted, InPreparation)];

const DRIVER: &[(OrderStatus, OrderStatus)] =
    &[(Announced, OutForDelivery), (OutForDelivery, Delivered)];

pub fn transitions_for(role: Role) -> &'static [(OrderStatus, OrderStatus)] {
    match role {
        Role::Director => DIRECTOR,
        Role::Receptionist => RECEPTIONIST,
        Role::Designer => DESIGNER,
        Role::Driver => DRIVER,
    }
}

/// True iff the literal (from, to) pair appears in the role's list.
pub fn is_transition_allowed(role: Role, from: OrderStatus, to: OrderStatus) -> bool {
    transitions_for(role)
        .iter()
        .any(|&(f, t)| f == from && t == to)
}

/// Target statuses the role may move this order to; empty means no actions
/// are offered.
pub fn allowed_next_statuses(role: Role, current: OrderStatus) -> Vec<OrderStatus> {
    transitions_for(role)
        .iter()
        .filter(|&&(f, _)| f == current)
        .map(|&(_, t)| t)
        .collect()
}

/// Only the director takes new orders over the phone.
pub fn can_create_order(role: Role) -> bool {
    role == Role::Director
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The five canonical forward-adjacent pairs.
    fn canonical_pairs() -> Vec<(OrderStatus, OrderStatus)> {
        OrderStatus::ALL
            .iter()
            .filter_map(|&s| s.next().map(|n| (s, n)))
            .collect()
    }

    #[test]
    fn director_allowed_exactly_the_forward_adjacent_pairs() {
        let canonical = canonical_pairs();
        for from in OrderStatus::ALL {
            for to in OrderStatus::ALL {
                let expected = canonical.contains(&(from, to));
                assert_eq!(
                    is_transition_allowed(Role::Director, from, to),
                    expected,
                    "director {from} -> {to}"
                );
            }
        }
    }

    #[test]
    fn director_cannot_skip_or_reverse() {
        assert!(!is_transition_allowed(
            Role::Director,
            Submitted,
            PaymentReceived
        ));
        assert!(!is_transition_allowed(
            Role::Director,
            InPreparation,
            Submitted
        ));
        assert!(!is_transition_allowed(Role::Director, Delivered, Submitted));
    }

    #[test]
    fn designer_limited_to_preparation() {
        for from in OrderStatus::ALL {
            for to in OrderStatus::ALL {
                let expected = from == Submitted && to == InPreparation;
                assert_eq!(is_transition_allowed(Role::Designer, from, to), expected);
            }
        }
        assert!(allowed_next_statuses(Role::Designer, PaymentReceived).is_empty());
    }

    #[test]
    fn receptionist_limited_to_announcement() {
        for from in OrderStatus::ALL {
            for to in OrderStatus::ALL {
                let expected = from == PaymentReceived && to == Announced;
                assert_eq!(is_transition_allowed(Role::Receptionist, from, to), expected);
            }
        }
    }

    #[test]
    fn driver_limited_to_dispatch_and_delivery() {
        let driver_pairs = [(Announced, OutForDelivery), (OutForDelivery, Delivered)];
        for from in OrderStatus::ALL {
            for to in OrderStatus::ALL {
                let expected = driver_pairs.contains(&(from, to));
                assert_eq!(is_transition_allowed(Role::Driver, from, to), expected);
            }
        }
    }

    #[test]
    fn unlisted_pairs_yield_empty_next_statuses() {
        for role in Role::ALL {
            for status in OrderStatus::ALL {
                let next = allowed_next_statuses(role, status);
                for to in OrderStatus::ALL {
                    assert_eq!(
                        next.contains(&to),
                        is_transition_allowed(role, status, to),
                        "{role} {status} -> {to}"
                    );
                }
            }
        }
        assert!(allowed_next_statuses(Role::Driver, Submitted).is_empty());
        assert!(allowed_next_statuses(Role::Receptionist, Delivered).is_empty());
    }

    #[test]
    fn no_role_may_reapply_the_current_status() {
        for role in Role::ALL {
            for status in OrderStatus::ALL {
                assert!(!is_transition_allowed(role, status, status));
            }
        }
    }

    #[test]
    fn only_director_creates_orders() {
        assert!(can_create_order(Role::Director));
        assert!(!can_create_order(Role::Receptionist));
        assert!(!can_create_order(Role::Designer));
        assert!(!can_create_order(Role::Driver));
    }
}
