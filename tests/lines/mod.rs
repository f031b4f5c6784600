mod list_added_lines_on_the_right;
mod list_deleted_lines_on_the_left;
