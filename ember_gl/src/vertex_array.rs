//! Vertex array object wrapper and the vertex layout description trait.

use gl::types::{GLintptr, GLsizei, GLuint};

use crate::buffer::Buffer;
use crate::types::DataType;

/// Semantic vertex attributes understood by [`VertexLayout`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Position,
    TexCoords,
    Normal,
    Color,
}

/// Static description of a vertex type's attribute layout.
///
/// Implemented by host-side vertex structs so a [`VertexArray`] can
/// configure attribute formats without the caller repeating indices,
/// sizes, and offsets at every call site.
pub trait VertexLayout {
    /// Attribute location in the shader
    fn attrib_index(attr: Attribute) -> u32;
    /// Base type selecting the format call (`Float`, `Double`, or `Int`)
    fn base_type(attr: Attribute) -> DataType;
    /// Number of components (1-4)
    fn component_count(attr: Attribute) -> i32;
    /// Component data type
    fn component_type(attr: Attribute) -> DataType;
    /// Byte stride between consecutive vertices
    fn stride() -> i32;
    /// Byte offset of the attribute within the vertex
    fn relative_offset(attr: Attribute) -> u32;
    /// Whether fixed-point data is normalized
    fn normalized(attr: Attribute) -> bool;
}

/// Move-only vertex array object.
pub struct VertexArray {
    id: GLuint,
}

impl VertexArray {
    /// Create a new vertex array object
    pub fn new() -> Self {
        let mut id = 0;
        unsafe {
            gl::CreateVertexArrays(1, &mut id);
        }
        Self { id }
    }

    /// Bind for drawing
    pub fn bind(&self) {
        unsafe {
            gl::BindVertexArray(self.id);
        }
    }

    /// Unbind the current vertex array
    pub fn unbind(&self) {
        unsafe {
            gl::BindVertexArray(0);
        }
    }

    /// Bind a vertex buffer to a binding slot
    pub fn bind_vertex_buffer(
        &self,
        buffer: &Buffer,
        offset: isize,
        stride: i32,
        binding_index: u32,
    ) {
        unsafe {
            gl::VertexArrayVertexBuffer(
                self.id,
                binding_index,
                buffer.id(),
                offset as GLintptr,
                stride as GLsizei,
            );
        }
    }

    /// Bind the element (index) buffer
    pub fn bind_element_buffer(&self, buffer: &Buffer) {
        unsafe {
            gl::VertexArrayElementBuffer(self.id, buffer.id());
        }
    }

    /// Enable an attribute slot
    pub fn enable_attribute_index(&self, attrib_index: u32) {
        unsafe {
            gl::EnableVertexArrayAttrib(self.id, attrib_index);
        }
    }

    /// Disable an attribute slot
    pub fn disable_attribute_index(&self, attrib_index: u32) {
        unsafe {
            gl::DisableVertexArrayAttrib(self.id, attrib_index);
        }
    }

    /// Describe a floating-point attribute format
    pub fn format_attribute(
        &self,
        attrib_index: u32,
        size: i32,
        data_type: DataType,
        normalized: bool,
        relative_offset: u32,
    ) {
        unsafe {
            gl::VertexArrayAttribFormat(
                self.id,
                attrib_index,
                size,
                data_type.to_gl(),
                normalized as u8,
                relative_offset,
            );
        }
    }

    /// Describe an integer attribute format
    pub fn format_attribute_i(
        &self,
        attrib_index: u32,
        size: i32,
        data_type: DataType,
        relative_offset: u32,
    ) {
        unsafe {
            gl::VertexArrayAttribIFormat(
                self.id,
                attrib_index,
                size,
                data_type.to_gl(),
                relative_offset,
            );
        }
    }

    /// Describe a double-precision attribute format
    pub fn format_attribute_l(
        &self,
        attrib_index: u32,
        size: i32,
        data_type: DataType,
        relative_offset: u32,
    ) {
        unsafe {
            gl::VertexArrayAttribLFormat(
                self.id,
                attrib_index,
                size,
                data_type.to_gl(),
                relative_offset,
            );
        }
    }

    /// Associate an attribute slot with a buffer binding slot
    pub fn bind_attribute(&self, attrib_index: u32, binding_index: u32) {
        unsafe {
            gl::VertexArrayAttribBinding(self.id, attrib_index, binding_index);
        }
    }

    /// Enable and format one attribute described by `V`'s layout
    pub fn enable_attribute<V: VertexLayout>(&self, attr: Attribute, binding_index: u32) {
        let index = V::attrib_index(attr);
        self.enable_attribute_index(index);

        match V::base_type(attr) {
            DataType::Double => self.format_attribute_l(
                index,
                V::component_count(attr),
                V::component_type(attr),
                V::relative_offset(attr),
            ),
            DataType::Int
            | DataType::UnsignedInt
            | DataType::Short
            | DataType::UnsignedShort
            | DataType::Byte
            | DataType::UnsignedByte => self.format_attribute_i(
                index,
                V::component_count(attr),
                V::component_type(attr),
                V::relative_offset(attr),
            ),
            _ => self.format_attribute(
                index,
                V::component_count(attr),
                V::component_type(attr),
                V::normalized(attr),
                V::relative_offset(attr),
            ),
        }

        self.bind_attribute(index, binding_index);
    }

    /// Enable and format several attributes described by `V`'s layout
    pub fn enable_attributes<V: VertexLayout>(&self, attrs: &[Attribute], binding_index: u32) {
        for &attr in attrs {
            self.enable_attribute::<V>(attr, binding_index);
        }
    }

    /// Disable one attribute described by `V`'s layout
    pub fn disable_attribute<V: VertexLayout>(&self, attr: Attribute) {
        self.disable_attribute_index(V::attrib_index(attr));
    }

    /// Driver handle
    pub fn id(&self) -> GLuint {
        self.id
    }
}

impl Default for VertexArray {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for VertexArray {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.id);
        }
    }
}
