use super::*;

#[test]
fn test_attachment_to_gl() {
    assert_eq!(FramebufferAttachment::Color0.to_gl(), gl::COLOR_ATTACHMENT0);
    assert_eq!(FramebufferAttachment::Color7.to_gl(), gl::COLOR_ATTACHMENT7);
    assert_eq!(FramebufferAttachment::Depth.to_gl(), gl::DEPTH_ATTACHMENT);
    assert_eq!(FramebufferAttachment::Stencil.to_gl(), gl::STENCIL_ATTACHMENT);
    assert_eq!(
        FramebufferAttachment::DepthStencil.to_gl(),
        gl::DEPTH_STENCIL_ATTACHMENT
    );
}

#[test]
fn test_color_attachments_are_consecutive() {
    let attachments = [
        FramebufferAttachment::Color0,
        FramebufferAttachment::Color1,
        FramebufferAttachment::Color2,
        FramebufferAttachment::Color3,
        FramebufferAttachment::Color4,
        FramebufferAttachment::Color5,
        FramebufferAttachment::Color6,
        FramebufferAttachment::Color7,
    ];
    for (i, attachment) in attachments.iter().enumerate() {
        assert_eq!(attachment.to_gl(), gl::COLOR_ATTACHMENT0 + i as u32);
    }
}

#[test]
fn test_status_from_gl() {
    assert_eq!(
        FramebufferStatus::from_gl(gl::FRAMEBUFFER_COMPLETE),
        FramebufferStatus::Complete
    );
    assert_eq!(
        FramebufferStatus::from_gl(gl::FRAMEBUFFER_UNSUPPORTED),
        FramebufferStatus::Unsupported
    );
    assert_eq!(
        FramebufferStatus::from_gl(gl::FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT),
        FramebufferStatus::IncompleteMissingAttachment
    );
    // Anything outside the status set maps to Unknown, not a panic.
    assert_eq!(FramebufferStatus::from_gl(0), FramebufferStatus::Unknown);
}

#[test]
fn test_target_to_gl() {
    assert_eq!(FramebufferTarget::Framebuffer.to_gl(), gl::FRAMEBUFFER);
    assert_eq!(FramebufferTarget::DrawFramebuffer.to_gl(), gl::DRAW_FRAMEBUFFER);
    assert_eq!(FramebufferTarget::ReadFramebuffer.to_gl(), gl::READ_FRAMEBUFFER);
}
