mod fail_on_a_missing_document;
mod fail_on_a_pdf_without_an_extraction_command;
mod ignore_case_from_the_environment;
mod ignore_differences_in_case;
mod ignore_differences_in_whitespace;
mod mark_replaced_words_inline;
mod print_identical_documents_unchanged;
mod read_pdf_text_through_an_extraction_command;
