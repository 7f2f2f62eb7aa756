/// Upload screen
///
/// Pick a photo, check it in the preview, then save it as today's
/// progress photo. The picked photo is staged as JPEG first; the staged
/// copy stays around until an upload succeeds so a failed upload can be
/// retried.
use iced::widget::{button, column, container, image, text, Space};
use iced::{Alignment, Element, Length, Task};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::Error;
use crate::photo::staging::{discard, stage_image};
use crate::platform::{ImagePicker, Permission};
use crate::state::date::DateId;
use crate::state::library::ProgressLibrary;
use crate::ui::notice::{self, Notice};

#[derive(Debug, Clone)]
pub enum Message {
    Pick,
    Staged(Result<PathBuf, Error>),
    Upload,
    Uploaded(Result<PathBuf, Error>),
    /// Jump to the gallery; handled by the application shell
    VerifyUploads,
    DismissNotice,
}

pub struct UploadScreen {
    library: ProgressLibrary,
    picker: Arc<dyn ImagePicker>,
    staging_dir: PathBuf,
    /// Staged copy of the picked photo
    selected: Option<PathBuf>,
    busy: bool,
    /// Inline confirmation after a successful upload
    message: Option<String>,
    notice: Option<Notice>,
}

impl UploadScreen {
    pub fn new(library: ProgressLibrary, picker: Arc<dyn ImagePicker>, staging_dir: PathBuf) -> Self {
        Self {
            library,
            picker,
            staging_dir,
            selected: None,
            busy: false,
            message: None,
            notice: None,
        }
    }

    pub fn selected(&self) -> Option<&Path> {
        self.selected.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Pick => self.pick_image(),
            Message::Staged(Ok(staged)) => {
                self.busy = false;
                if let Some(previous) = self.selected.replace(staged) {
                    discard(&previous);
                }
                self.message = None;
                Task::none()
            }
            Message::Staged(Err(err)) => {
                tracing::error!("❌ Could not stage picked photo: {}", err);
                self.busy = false;
                self.notice = Some(Notice::new(
                    "Could not read image",
                    "The selected file is not a supported image",
                ));
                Task::none()
            }
            Message::Upload => self.upload_image(DateId::today()),
            Message::Uploaded(Ok(stored)) => {
                tracing::info!("✅ Upload complete: {}", stored.display());
                self.busy = false;
                if let Some(staged) = self.selected.take() {
                    discard(&staged);
                }
                self.message = Some("Image uploaded successfully!".to_string());
                Task::none()
            }
            Message::Uploaded(Err(err)) => {
                tracing::error!("❌ Upload error: {}", err);
                self.busy = false;
                self.notice = Some(Notice::new(
                    "Upload failed",
                    "There was an error saving the image",
                ));
                Task::none()
            }
            Message::VerifyUploads => Task::none(),
            Message::DismissNotice => {
                self.notice = None;
                Task::none()
            }
        }
    }

    fn pick_image(&mut self) -> Task<Message> {
        if self.picker.request_permission() == Permission::Denied {
            tracing::warn!("⚠️  {}", Error::PermissionDenied);
            self.notice = Some(Notice::new(
                "Permission required",
                "Need photo library access to select images",
            ));
            return Task::none();
        }

        let Some(source) = self.picker.browse() else {
            return Task::none();
        };

        self.busy = true;
        Task::perform(
            stage_image(source, self.staging_dir.clone()),
            Message::Staged,
        )
    }

    /// Save the picked photo as the progress photo for `date`
    fn upload_image(&mut self, date: DateId) -> Task<Message> {
        let Some(source) = self.selected.clone() else {
            tracing::warn!("⚠️  {}", Error::NoSelection);
            self.notice = Some(Notice::new(
                "No image selected",
                "Please select an image first",
            ));
            return Task::none();
        };

        self.busy = true;
        Task::perform(
            store_upload(self.library.clone(), source, date),
            Message::Uploaded,
        )
    }

    pub fn view(&self) -> Element<Message> {
        let mut select = button(text("Select Image")).padding(14).width(262.0);
        let mut upload = button(text("Upload Image")).padding(14).width(262.0);
        if !self.busy {
            select = select.on_press(Message::Pick);
            upload = upload.on_press(Message::Upload);
        }

        let photo: Element<Message> = match &self.selected {
            Some(path) => image(path.as_path())
                .width(300.0)
                .height(300.0)
                .into(),
            None => Space::with_height(300.0).into(),
        };

        let status: Element<Message> = match &self.message {
            Some(message) => text(message).size(16).style(text::success).into(),
            None if self.busy => text("Working…").size(16).into(),
            None => Space::with_height(0.0).into(),
        };

        let content: Element<Message> = container(
            column![
                select,
                upload,
                photo,
                button(text("Verify uploads here"))
                    .on_press(Message::VerifyUploads)
                    .style(button::text),
                status,
            ]
            .spacing(24)
            .align_x(Alignment::Center),
        )
        .padding(40)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into();

        notice::overlay(content, self.notice.as_ref(), Message::DismissNotice)
    }
}

/// Save the staged photo at `source` as the progress photo for `date`
pub async fn store_upload(
    library: ProgressLibrary,
    source: PathBuf,
    date: DateId,
) -> Result<PathBuf, Error> {
    tracing::debug!("⬆️  Uploading {} for {}", source.display(), date);
    library.put(date, &source).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Picker with a scripted answer
    #[derive(Debug)]
    struct ScriptedPicker {
        permission: Permission,
        file: Option<PathBuf>,
    }

    impl ImagePicker for ScriptedPicker {
        fn request_permission(&self) -> Permission {
            self.permission
        }

        fn browse(&self) -> Option<PathBuf> {
            self.file.clone()
        }
    }

    fn screen(root: &Path, permission: Permission, file: Option<PathBuf>) -> UploadScreen {
        UploadScreen::new(
            ProgressLibrary::new(root.join("gym-progress")),
            Arc::new(ScriptedPicker { permission, file }),
            root.join("picked"),
        )
    }

    #[test]
    fn test_denied_permission_shows_notice() {
        let temp = tempdir().unwrap();
        let mut screen = screen(
            temp.path(),
            Permission::Denied,
            Some(temp.path().join("photo.png")),
        );

        let _ = screen.update(Message::Pick);

        assert_eq!(screen.notice().unwrap().title, "Permission required");
        assert!(screen.selected().is_none());
        assert!(!screen.busy);
    }

    #[test]
    fn test_cancelled_dialog_changes_nothing() {
        let temp = tempdir().unwrap();
        let mut screen = screen(temp.path(), Permission::Granted, None);

        let _ = screen.update(Message::Pick);

        assert!(screen.notice().is_none());
        assert!(!screen.busy);
    }

    #[test]
    fn test_upload_without_selection() {
        let temp = tempdir().unwrap();
        let mut screen = screen(temp.path(), Permission::Granted, None);

        let _ = screen.update(Message::Upload);

        assert_eq!(screen.notice().unwrap().title, "No image selected");
        assert!(!screen.busy);
    }

    #[test]
    fn test_failed_upload_keeps_selection() {
        let temp = tempdir().unwrap();
        let mut screen = screen(temp.path(), Permission::Granted, None);
        let staged = temp.path().join("picked-1.jpg");
        std::fs::write(&staged, b"jpeg").unwrap();

        let _ = screen.update(Message::Staged(Ok(staged.clone())));
        let _ = screen.update(Message::Upload);
        assert!(screen.busy);
        let _ = screen.update(Message::Uploaded(Err(Error::Io("disk full".to_string()))));

        assert_eq!(screen.notice().unwrap().title, "Upload failed");
        assert_eq!(screen.selected(), Some(staged.as_path()));
        assert!(staged.exists());
    }

    #[test]
    fn test_successful_upload_clears_selection() {
        let temp = tempdir().unwrap();
        let mut screen = screen(temp.path(), Permission::Granted, None);
        let staged = temp.path().join("picked-1.jpg");
        std::fs::write(&staged, b"jpeg").unwrap();

        let _ = screen.update(Message::Staged(Ok(staged.clone())));
        let _ = screen.update(Message::Uploaded(Ok(temp.path().join("2024-06-15.jpg"))));

        assert!(screen.selected().is_none());
        assert_eq!(screen.message(), Some("Image uploaded successfully!"));
        assert!(!staged.exists());
    }

    #[test]
    fn test_new_pick_replaces_previous_staged_copy() {
        let temp = tempdir().unwrap();
        let mut screen = screen(temp.path(), Permission::Granted, None);
        let first = temp.path().join("picked-1.jpg");
        let second = temp.path().join("picked-2.jpg");
        std::fs::write(&first, b"a").unwrap();
        std::fs::write(&second, b"b").unwrap();

        let _ = screen.update(Message::Staged(Ok(first.clone())));
        let _ = screen.update(Message::Staged(Ok(second.clone())));

        assert_eq!(screen.selected(), Some(second.as_path()));
        assert!(!first.exists());
    }

    #[tokio::test]
    async fn test_upload_stores_todays_photo() {
        let temp = tempdir().unwrap();
        let source = temp.path().join("photo.png");
        ::image::RgbImage::new(4, 3).save(&source).unwrap();
        let mut screen = screen(temp.path(), Permission::Granted, Some(source.clone()));

        let staged = stage_image(source, screen.staging_dir.clone()).await.unwrap();
        let _ = screen.update(Message::Staged(Ok(staged.clone())));
        let _ = screen.update(Message::Upload);
        assert!(screen.busy);

        let today = DateId::today();
        let result = store_upload(screen.library.clone(), staged.clone(), today).await;
        let _ = screen.update(Message::Uploaded(result));

        let stored = screen.library.get(today).await.unwrap().unwrap();
        assert!(stored.ends_with(format!("gym-progress/{}.jpg", today)));
        assert_eq!(screen.message(), Some("Image uploaded successfully!"));
        assert!(screen.selected().is_none());
        assert!(!staged.exists());
    }

    #[tokio::test]
    async fn test_store_upload_uses_given_date() {
        let temp = tempdir().unwrap();
        let library = ProgressLibrary::new(temp.path().join("gym-progress"));
        let source = temp.path().join("picked-1.jpg");
        std::fs::write(&source, b"jpeg").unwrap();
        let day: DateId = "2024-06-15".parse().unwrap();

        let stored = store_upload(library.clone(), source, day).await.unwrap();

        assert_eq!(stored, library.path_for(day));
        let names: Vec<String> = library
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|entry| entry.filename)
            .collect();
        assert_eq!(names, vec!["2024-06-15.jpg".to_string()]);
    }
}
