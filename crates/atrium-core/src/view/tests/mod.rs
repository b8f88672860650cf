mod alerts_tests;
