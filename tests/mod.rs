mod dashboard_flow;

// This file organizes the integration tests into a cohesive test suite.
// Each module tests a specific aspect of the application:
// - smoke_tests: Basic functionality tests to ensure nothing is broken
// - event_feed_mock: Fetching against a mock HTTP API
// - dashboard_flow: Browsing the store the way the terminal front end drives it
