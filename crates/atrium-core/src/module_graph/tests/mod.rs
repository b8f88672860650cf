mod version_tests;
