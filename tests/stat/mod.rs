mod count_removed_and_added_text;
mod report_no_differences;
