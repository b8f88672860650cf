mod mount_tests;
