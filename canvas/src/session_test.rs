use super::*;

#[test]
fn new_session_is_loading() {
    let session = Session::new();
    assert_eq!(session.phase(), Phase::Loading);
    assert!(!session.is_ready());
}

#[test]
fn ticket_accepted_while_loading_and_ready() {
    let mut session = Session::new();
    let ticket = session.ticket();
    assert!(session.accepts(ticket));
    assert!(session.mark_ready());
    assert!(session.accepts(ticket));
}

#[test]
fn mark_ready_only_from_loading() {
    let mut session = Session::new();
    assert!(session.mark_ready());
    assert!(!session.mark_ready());
    session.dispose();
    assert!(!session.mark_ready());
    assert_eq!(session.phase(), Phase::Disposed);
}

#[test]
fn dispose_rejects_outstanding_tickets() {
    let mut session = Session::new();
    let load = session.ticket();
    session.dispose();
    assert!(!session.accepts(load));
}

#[test]
fn dispose_during_loading_rejects_load_completion() {
    let mut session = Session::new();
    let load = session.ticket();
    session.dispose();
    assert!(!session.accepts(load));
    assert!(!session.is_ready());
}

#[test]
fn tickets_issued_after_dispose_are_rejected() {
    let mut session = Session::new();
    session.dispose();
    let late = session.ticket();
    assert!(!session.accepts(late));
}
