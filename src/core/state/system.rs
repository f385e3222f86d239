use crate::core::{
    cmd::{Cmd, TuiCommand},
    msg::system::SystemMsg,
};

/// Process lifecycle flags and the status line
#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub should_quit: bool,
    /// Read by the runner, which hands the terminal back to the shell.
    pub should_suspend: bool,
    pub status_message: Option<String>,
}

impl SystemState {
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }
            SystemMsg::Suspend => {
                self.should_suspend = true;
                vec![]
            }
            SystemMsg::Resume => {
                self.should_suspend = false;
                vec![Cmd::RequestRender]
            }
            SystemMsg::Resize(width, height) => {
                vec![Cmd::Tui(TuiCommand::Resize { width, height })]
            }
            SystemMsg::SetStatus(message) => {
                self.status_message = Some(message);
                vec![]
            }
            SystemMsg::ClearStatus => {
                self.status_message = None;
                vec![]
            }
            SystemMsg::ShowError(error) => {
                self.status_message = Some(format!("Error: {error}"));
                vec![Cmd::LogError { message: error }]
            }
        }
    }
}
