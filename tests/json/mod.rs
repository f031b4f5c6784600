mod dump_the_comparison_result;
