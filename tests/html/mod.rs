mod render_a_side_by_side_page;
mod write_the_page_to_a_file;
