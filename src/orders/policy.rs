use crate::model::OrderStatus;

/// Which status changes an order accepts.
///
/// Used as the order collection's run context, so it is fixed for the lifetime of the
/// collection task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum TransitionPolicy {
    /// Any status may follow any other.
    #[default]
    Permissive,
    /// Orders only advance one step at a time: `new` → `in-progress` → `ready`.
    /// Re-sending the current status is accepted.
    ForwardOnly,
}

impl TransitionPolicy {
    pub fn allows(self, from: OrderStatus, to: OrderStatus) -> bool {
        match self {
            TransitionPolicy::Permissive => true,
            TransitionPolicy::ForwardOnly => matches!(
                (from, to),
                (OrderStatus::New, OrderStatus::InProgress)
                    | (OrderStatus::InProgress, OrderStatus::Ready)
            ) || from == to,
        }
    }
}
