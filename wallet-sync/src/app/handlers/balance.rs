//! Balance updates.

use chrono::{DateTime, Utc};
use shared::dto::gui::BalanceReply;

use super::{replace, Update};
use crate::app::state::{Balances, ViewModel};

pub fn apply(view: &mut ViewModel, reply: BalanceReply, now: DateTime<Utc>) -> Update {
    let balances = Balances {
        confirmed: reply.confirmed,
        unconfirmed: reply.unconfirmed,
        spf_funds: reply.spf_funds,
        claim: reply.claim,
    };
    let changed = replace(&mut view.balances, balances);
    view.last_updated.balance = Some(now);
    Update::changed(changed)
}
