
#[cfg(test)]
mod board_create_tests;

#[cfg(test)]
mod board_edit_tests;

#[cfg(test)]
mod board_delete_tests;


#[cfg(test)]
mod board_filter_tests;

#[cfg(test)]
mod level_progress_tests;
