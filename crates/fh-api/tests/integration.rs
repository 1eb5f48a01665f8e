// Single integration test target that includes all test modules.
// DB-backed tests connect to TEST_DATABASE_URL and skip when it is unset.

mod common;

mod reply_tests;
