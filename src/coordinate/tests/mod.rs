mod point_tests;
