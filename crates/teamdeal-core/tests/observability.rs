//! Observability tests for dealing lifecycle tracing.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_test::traced_test;

use teamdeal_core::{
    emit_dealing_finished, emit_member_unassigned, emit_pools_distributed, emit_round_completed,
    emit_round_terminal, form_teams, DealSpan, Member, QuotaTable, RoleOrder, Setup,
};

#[traced_test]
#[test]
fn test_emit_pools_distributed_logs_counts() {
    emit_pools_distributed(2, 5, 1);
    assert!(logs_contain("pools.distributed"));
}

#[traced_test]
#[test]
fn test_emit_member_unassigned_logs_warning() {
    emit_member_unassigned("Ada", "pilot");
    assert!(logs_contain("member.unassigned"));
    assert!(logs_contain("pilot"));
}

#[traced_test]
#[test]
fn test_round_events_are_emitted() {
    emit_round_completed(1, 4);
    emit_round_terminal(2, Some("driver"), 1);
    assert!(logs_contain("round.completed"));
    assert!(logs_contain("round.terminal"));
}

#[traced_test]
#[test]
fn test_deal_span_enter_creates_span() {
    let span = DealSpan::enter(3, 12);
    emit_dealing_finished(2, 8, 4);
    drop(span);
    assert!(logs_contain("dealing.finished"));
}

#[traced_test]
#[test]
fn test_form_teams_reports_unassigned_member() {
    let setup = Setup {
        quotas: [("driver", 1)].into_iter().collect::<QuotaTable>(),
        members: vec![Member::new("A", "driver", 1), Member::new("Z", "pilot", 1)],
    };

    let outcome = form_teams(setup, RoleOrder::Declared, &mut StdRng::seed_from_u64(0));

    assert_eq!(outcome.teams.len(), 1);
    assert!(logs_contain("member.unassigned"));
    assert!(logs_contain("dealing.finished"));
}
