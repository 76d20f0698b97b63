mod lazy_list_tests;
