//! Emission context: walks the schema graph and assembles source files.
//!
//! Every entity is emitted at most once; results are memoized by [`TypeId`].
//! A model's declaration is registered before its body is mapped, so the
//! body can refer back to it. A reference to a model whose declaration is
//! still under construction becomes a placeholder that resolves to the
//! name reference as soon as that declaration finishes.

use crate::error::CodegenError;
use crate::options::EmitterOptions;
use crate::output::{EmittedSourceFile, OutputSink};
use crate::typescript::node::{Identifier, TsNode};
use crate::typescript::printer::Printer;
use crate::typescript::types::reference;
use std::collections::HashMap;
use tspts_core::{
    DeclarationRegistry, EmitEntity, EmitError, Emitted, Placeholder, Result, ScopeId, SourceFile,
};
use tspts_schema::{Model, SchemaGraph, Type, TypeId};

/// TypeScript emitter over one schema graph.
pub struct Emitter<'a> {
    pub(crate) graph: &'a SchemaGraph,
    pub(crate) options: EmitterOptions,
    registry: DeclarationRegistry<TsNode>,
    program_scope: Option<ScopeId>,
    cache: HashMap<TypeId, EmitEntity<TsNode>>,
    // Declarations under construction. The placeholder is created on the
    // first circular reference and resolves with the declared name.
    declarations_in_progress: HashMap<TypeId, Option<Placeholder<Identifier>>>,
    // Anonymous code under construction, re-entered through a model body.
    code_in_progress: HashMap<TypeId, Option<Placeholder<TsNode>>>,
}

impl<'a> Emitter<'a> {
    /// Creates an emitter for `graph`.
    #[must_use]
    pub fn new(graph: &'a SchemaGraph, options: EmitterOptions) -> Self {
        Self {
            graph,
            options,
            registry: DeclarationRegistry::new(),
            program_scope: None,
            cache: HashMap::new(),
            declarations_in_progress: HashMap::new(),
            code_in_progress: HashMap::new(),
        }
    }

    /// Returns the emitter options.
    #[must_use]
    pub fn options(&self) -> &EmitterOptions {
        &self.options
    }

    /// Returns the declaration registry.
    #[must_use]
    pub fn registry(&self) -> &DeclarationRegistry<TsNode> {
        &self.registry
    }

    pub(crate) fn lookup(&self, id: TypeId) -> Result<&'a Type> {
        let graph: &'a SchemaGraph = self.graph;
        graph
            .get(id)
            .ok_or_else(|| EmitError::unresolved(format!("type {}", id)))
    }

    fn program_scope(&mut self) -> ScopeId {
        match self.program_scope {
            Some(scope) => scope,
            None => {
                let scope = self
                    .registry
                    .create_source_file(self.options.output_file_name());
                self.program_scope = Some(scope);
                scope
            }
        }
    }

    /// Emits every model of the graph in declaration order.
    ///
    /// # Errors
    /// Returns the first `EmitError` raised while mapping.
    pub fn emit_program(&mut self) -> Result<()> {
        self.program_scope();
        let graph = self.graph;
        for (id, _) in graph.models() {
            self.emit_type(id)?;
        }
        Ok(())
    }

    /// Emits an entity by value.
    ///
    /// Models yield their declaration; every other kind yields code.
    ///
    /// # Errors
    /// Returns `EmitError` if the entity or one of its children cannot be mapped.
    pub fn emit_type(&mut self, id: TypeId) -> Result<EmitEntity<TsNode>> {
        if let Some(cached) = self.cache.get(&id) {
            return Ok(cached.clone());
        }
        if let Some(slot) = self.code_in_progress.get_mut(&id) {
            tracing::trace!("Type {} re-entered during its own construction", id);
            let waiting = slot.get_or_insert_with(Placeholder::new).clone();
            return Ok(EmitEntity::Code(Emitted::Pending(waiting)));
        }

        let ty = self.lookup(id)?;
        if let Type::Model(model) = ty {
            return self.emit_model_declaration(id, model);
        }

        self.code_in_progress.insert(id, None);
        let result = self.emit_code(ty);
        let waiting = self.code_in_progress.remove(&id).flatten();
        let emitted = result?;

        if let Some(waiting) = waiting {
            emitted.on_value(move |node| waiting.resolve(node.clone()))?;
        }

        let entity = EmitEntity::Code(emitted.settle());
        self.cache.insert(id, entity.clone());
        Ok(entity)
    }

    fn emit_code(&mut self, ty: &'a Type) -> Result<Emitted<TsNode>> {
        match ty {
            Type::Scalar(scalar) => self.scalar_type(scalar).map(Emitted::Ready),
            Type::Union(union) => self.union_literal(union),
            Type::Array(array) => self.array_literal(array),
            Type::Intrinsic(intrinsic) => self.intrinsic(intrinsic).map(Emitted::Ready),
            Type::Model(_) => Err(EmitError::mismatch("inline type", ty.kind_name())),
        }
    }

    /// Emits an entity in type position.
    ///
    /// Models become a reference by name; every other kind is emitted inline.
    ///
    /// # Errors
    /// Returns `EmitError` if the entity cannot be mapped.
    pub fn emit_type_reference(&mut self, id: TypeId) -> Result<EmitEntity<TsNode>> {
        let ty = self.lookup(id)?;
        let Type::Model(model) = ty else {
            return self.emit_type(id);
        };

        if let Some(slot) = self.declarations_in_progress.get_mut(&id) {
            tracing::trace!("Deferring circular reference to {}", model.name);
            let completion = slot.get_or_insert_with(Placeholder::new).clone();
            let output = Placeholder::new();
            let target = output.clone();
            completion.on_value(move |name: &Identifier| target.resolve(reference(name)))?;
            return Ok(EmitEntity::Code(Emitted::Pending(output)));
        }

        let decl = self.emit_type(id)?.into_declaration()?;
        Ok(EmitEntity::code(reference(&Identifier::new(decl.name))))
    }

    fn emit_model_declaration(
        &mut self,
        id: TypeId,
        model: &'a Model,
    ) -> Result<EmitEntity<TsNode>> {
        let scope = self.program_scope();
        let body = Placeholder::new();
        let decl = self
            .registry
            .declare(scope, model.name.clone(), Emitted::Pending(body.clone()))?;
        tracing::debug!("Declared {} in scope {}", model.name, scope.index());

        self.cache.insert(id, EmitEntity::Declaration(decl.clone()));
        self.declarations_in_progress.insert(id, None);
        let name = Identifier::new(model.name.clone());
        let result = self.model_declaration(model, &name);
        let completion = self.declarations_in_progress.remove(&id).flatten();
        let emitted = result?;

        emitted.on_value(move |node| body.resolve(node.clone()))?;
        if let Some(completion) = completion {
            tracing::trace!("Resolving deferred references to {}", model.name);
            completion.resolve(name)?;
        }

        let mut decl = decl;
        decl.value = decl.value.settle();
        self.registry.update(scope, &decl.name, decl.value.clone())?;
        let entity = EmitEntity::Declaration(decl);
        self.cache.insert(id, entity.clone());
        Ok(entity)
    }

    /// Finalizes one source file: extracts every declaration and renders it.
    ///
    /// # Errors
    /// Returns `EmitError::Unresolved` if a declaration never resolved, or
    /// `EmitError::TypeMismatch` if a declaration is not a statement.
    pub fn emit_source_file(&self, file: &SourceFile<TsNode>) -> Result<EmittedSourceFile> {
        let mut statements = Vec::with_capacity(file.declarations().len());
        for decl in file.declarations() {
            let node = decl.extract()?;
            if !node.is_statement() {
                return Err(EmitError::mismatch("statement", node.kind_name()));
            }
            statements.push(node);
        }

        let contents = Printer::new(self.options.indent()).print_file(&statements)?;
        tracing::debug!(
            "Finalized {} ({} declarations)",
            file.path().display(),
            statements.len()
        );

        Ok(EmittedSourceFile {
            path: file.path().to_path_buf(),
            contents,
        })
    }

    /// Finalizes every source file.
    ///
    /// # Errors
    /// Returns the first finalization error.
    pub fn emit_source_files(&self) -> Result<Vec<EmittedSourceFile>> {
        self.registry
            .source_files()
            .iter()
            .map(|file| self.emit_source_file(file))
            .collect()
    }

    /// Finalizes every source file, then writes them all to `sink`.
    ///
    /// Nothing is written unless every file finalizes.
    ///
    /// # Errors
    /// Returns `CodegenError` if finalization or writing fails.
    pub fn write_output(
        &self,
        sink: &mut dyn OutputSink,
    ) -> std::result::Result<(), CodegenError> {
        let files = self.emit_source_files()?;
        for file in &files {
            sink.write(&file.path, &file.contents)?;
            tracing::info!("Wrote {} ({} bytes)", file.path.display(), file.contents.len());
        }
        Ok(())
    }
}
