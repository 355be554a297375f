// End-to-end tests for the Startup Insight Backend API
//
// Each test starts the real router on an ephemeral port. The completion and
// speech backends are replaced by in-process stubs, so no model server or
// network access is needed.

mod test_health;
